use careerpath_config::CareerConfig;
use careerpath_core::{Result, SkillStore};
use careerpath_store::SqliteSkillStore;

use super::SkillsAction;

pub(super) async fn cmd_skills(config: CareerConfig, action: SkillsAction) -> Result<()> {
    let store = SqliteSkillStore::from_uri(&config.store.uri)?;
    match action {
        SkillsAction::List => {
            let names = store.skill_names().await?;
            if names.is_empty() {
                println!("No skills stored.");
            }
            for name in names {
                println!("{name}");
            }
        }
        SkillsAction::Import { file } => {
            let count = store.import_json(&file)?;
            println!("Imported {count} skill record(s) from {}", file.display());
        }
    }
    Ok(())
}
