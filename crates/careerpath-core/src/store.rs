use async_trait::async_trait;

use crate::error::Result;
use crate::types::SkillRecord;

/// Read access to the persisted skill documents.
///
/// Implementations are shared across in-flight requests behind an `Arc`.
#[async_trait]
pub trait SkillStore: Send + Sync {
    /// The `skill` field of every record, in storage order.
    async fn skill_names(&self) -> Result<Vec<String>>;

    /// Case-insensitive exact match on the full skill name. The name is
    /// compared literally, never as a pattern. If several records match,
    /// the first stored one wins.
    async fn find_skill(&self, name: &str) -> Result<Option<SkillRecord>>;
}
