use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Substituted when a matched skill has no `scope`.
pub const DEFAULT_SCOPE: &str = "No scope data available";
/// Single-entry list substituted when a matched skill has no `related_roles`.
pub const DEFAULT_ROLE: &str = "No roles data available";
/// Substituted when a matched skill has no `growth_rate`.
pub const DEFAULT_GROWTH_RATE: &str = "No growth rate data available";
/// Emitted in place of a structured insight when the second lookup misses.
pub const NO_DATA_MARKER: &str = "No data available";

/// A persisted skill document.
///
/// Only `skill` is required; the metadata fields may be absent (or `null`)
/// in the store and are defaulted when an insight is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Canonical display name.
    pub skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<String>,
}

impl SkillRecord {
    /// A record carrying only a name.
    pub fn named(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            scope: None,
            related_roles: None,
            growth_rate: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_related_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_growth_rate(mut self, growth_rate: impl Into<String>) -> Self {
        self.growth_rate = Some(growth_rate.into());
        self
    }
}

/// Career metadata for one matched skill, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInsight {
    pub scope: String,
    pub related_roles: Vec<String>,
    pub growth_rate: String,
}

impl SkillInsight {
    pub fn from_record(record: &SkillRecord) -> Self {
        Self {
            scope: record
                .scope
                .clone()
                .unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            related_roles: record
                .related_roles
                .clone()
                .unwrap_or_else(|| vec![DEFAULT_ROLE.to_string()]),
            growth_rate: record
                .growth_rate
                .clone()
                .unwrap_or_else(|| DEFAULT_GROWTH_RATE.to_string()),
        }
    }
}

/// The value stored per matched skill in an [`InsightRecord`].
///
/// Serializes either as an object or as the bare string
/// [`NO_DATA_MARKER`], so consumers must accept both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Insight {
    Details(SkillInsight),
    Unavailable(String),
}

impl Insight {
    pub fn unavailable() -> Self {
        Insight::Unavailable(NO_DATA_MARKER.to_string())
    }

    pub fn details(&self) -> Option<&SkillInsight> {
        match self {
            Insight::Details(d) => Some(d),
            Insight::Unavailable(_) => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Insight::Unavailable(_))
    }
}

/// Response payload: canonical skill name → insight.
pub type InsightRecord = BTreeMap<String, Insight>;
