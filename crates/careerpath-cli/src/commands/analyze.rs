use console::style;
use std::path::PathBuf;
use std::sync::Arc;

use careerpath_config::CareerConfig;
use careerpath_core::{Analyzer, Insight, InsightRecord, Result, SkillStore};
use careerpath_store::{MemorySkillStore, SqliteSkillStore, load_seed_file};

pub(super) async fn cmd_analyze(
    config: CareerConfig,
    text: String,
    seed: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let store: Arc<dyn SkillStore> = match seed {
        Some(path) => Arc::new(MemorySkillStore::with_records(load_seed_file(&path)?)),
        None => Arc::new(SqliteSkillStore::from_uri(&config.store.uri)?),
    };

    let record = Analyzer::new(store).analyze(&text).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

fn print_record(record: &InsightRecord) {
    if record.is_empty() {
        println!("No known skills found.");
        return;
    }
    for (skill, insight) in record {
        println!("{}", style(skill).bold());
        match insight {
            Insight::Details(d) => {
                println!("   Scope:         {}", d.scope);
                println!("   Related roles: {}", d.related_roles.join(", "));
                println!("   Growth rate:   {}", d.growth_rate);
            }
            Insight::Unavailable(marker) => println!("   {}", style(marker).dim()),
        }
    }
}
