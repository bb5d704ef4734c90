use std::path::Path;
use tracing::info;

use careerpath_core::{Result, SkillRecord};

/// Parse a JSON array of skill records.
pub fn parse_seed(raw: &str) -> Result<Vec<SkillRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<SkillRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let records = parse_seed(&raw)?;
    info!(?path, count = records.len(), "read skill seed file");
    Ok(records)
}
