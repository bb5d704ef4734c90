use std::sync::Arc;
use tracing::{debug, info};

use crate::error::Result;
use crate::matcher::Vocabulary;
use crate::store::SkillStore;
use crate::types::{Insight, InsightRecord, SkillInsight};

/// Turns free-text skill descriptions into an [`InsightRecord`].
///
/// The vocabulary is reloaded from the store on every call.
#[derive(Clone)]
pub struct Analyzer {
    store: Arc<dyn SkillStore>,
}

impl Analyzer {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }

    /// Load the current vocabulary from the store.
    pub async fn load_vocabulary(&self) -> Result<Vocabulary> {
        let names = self.store.skill_names().await?;
        debug!(count = names.len(), "loaded skill vocabulary");
        Ok(Vocabulary::new(names))
    }

    /// Match `text` against the vocabulary and look up each matched skill.
    pub async fn analyze(&self, text: &str) -> Result<InsightRecord> {
        let vocabulary = self.load_vocabulary().await?;
        let matched = vocabulary.extract(text);
        debug!(matched = ?matched, "extracted skills");

        let mut insights = InsightRecord::new();
        for skill in matched {
            let insight = match self.store.find_skill(&skill).await? {
                Some(record) => Insight::Details(SkillInsight::from_record(&record)),
                None => {
                    debug!(skill = %skill, "matched skill missing on lookup");
                    Insight::unavailable()
                }
            };
            insights.insert(skill, insight);
        }

        info!(
            vocabulary = vocabulary.len(),
            matched = insights.len(),
            "analyzed skills text"
        );
        Ok(insights)
    }
}
