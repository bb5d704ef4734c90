use std::sync::Arc;
use tracing::{info, warn};

use careerpath_config::CareerConfig;
use careerpath_core::Result;
use careerpath_server::AppState;
use careerpath_store::SqliteSkillStore;

pub(super) async fn cmd_serve(config: CareerConfig) -> Result<()> {
    println!("careerpath v{}", env!("CARGO_PKG_VERSION"));
    println!("   Store:  {}", config.store.uri);
    println!("   Listen: {}", config.server.listen);
    println!();

    let store = SqliteSkillStore::from_uri(&config.store.uri)?;
    match store.count()? {
        0 => warn!("skill store is empty, every analysis will return no matches"),
        count => info!(count, "skill store ready"),
    }

    let state = Arc::new(AppState::new(Arc::new(store)));
    careerpath_server::start_server(state, config.server).await
}
