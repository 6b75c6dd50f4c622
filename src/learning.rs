// File: src/learning.rs
use crate::core::dictionary::NameDictionary;
use crate::core::types::NameEntry;

pub struct LearningEngine;

/// A translation the user has confirmed as correct for a name.
pub struct NameConfirmation {
    pub arabic: String,
    pub english: String,
}

impl From<NameEntry> for NameConfirmation {
    fn from(entry: NameEntry) -> Self {
        Self { arabic: entry.arabic, english: entry.english }
    }
}

impl LearningEngine {
    pub fn new() -> Self {
        Self
    }

    /// Records the confirmation in the learned dictionary.
    /// Returns `false` when either side is blank and nothing was stored.
    pub fn learn(&self, learned: &mut NameDictionary, confirmation: &NameConfirmation) -> bool {
        let stored = learned.insert(&confirmation.arabic, &confirmation.english);
        if stored {
            tracing::debug!(
                arabic = %confirmation.arabic,
                english = %confirmation.english,
                "learned name"
            );
        }
        stored
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new()
    }
}
