//! Case-insensitive substring matching of free text against the skill vocabulary.
//!
//! Matching is a plain containment scan over the lowercased input. There is no
//! word-boundary awareness: a vocabulary entry `art` matches inside `smart`.

use std::collections::{BTreeSet, HashMap};

/// Lowercase `text` for comparison. This is the only normalization applied.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercased skill names mapped back to their canonical spelling.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    keys: HashMap<String, String>,
}

impl Vocabulary {
    /// Build from canonical names in storage order.
    ///
    /// Names that collide after lowercasing keep the last one seen. Empty
    /// names are skipped since they would match every input.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys = HashMap::new();
        for name in names {
            let name = name.into();
            if name.is_empty() {
                continue;
            }
            keys.insert(normalize(&name), name);
        }
        Self { keys }
    }

    /// Number of distinct lowercase keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Canonical spelling for a name, compared case-insensitively.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.keys.get(&normalize(name)).map(String::as_str)
    }

    /// Canonical names of every skill whose lowercase form occurs in `text`.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        if text.is_empty() {
            return BTreeSet::new();
        }
        let haystack = normalize(text);
        self.keys
            .iter()
            .filter(|(key, _)| haystack.contains(key.as_str()))
            .map(|(_, canonical)| canonical.clone())
            .collect()
    }
}

/// Build a [`Vocabulary`] from `names` and extract the skills mentioned in `text`.
pub fn extract_skills<I, S>(names: I, text: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Vocabulary::new(names).extract(text)
}
