use async_trait::async_trait;
use parking_lot::RwLock;

use careerpath_core::{Result, SkillRecord, SkillStore, normalize};

/// In-memory skill store. Records keep insertion order.
#[derive(Default)]
pub struct MemorySkillStore {
    records: RwLock<Vec<SkillRecord>>,
}

impl MemorySkillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<SkillRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn insert(&self, record: SkillRecord) {
        self.records.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl SkillStore for MemorySkillStore {
    async fn skill_names(&self) -> Result<Vec<String>> {
        Ok(self.records.read().iter().map(|r| r.skill.clone()).collect())
    }

    async fn find_skill(&self, name: &str) -> Result<Option<SkillRecord>> {
        let key = normalize(name);
        Ok(self
            .records
            .read()
            .iter()
            .find(|r| normalize(&r.skill) == key)
            .cloned())
    }
}
