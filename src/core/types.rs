// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A normalized Arabic key, as produced by `normalizer::clean`.
pub type ArabicKey = String;

/// One curated mapping from an Arabic name to its Latin rendering.
/// This is the unit that gets learned, imported and persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub arabic: String,
    pub english: String,
}

impl NameEntry {
    pub fn new(arabic: &str, english: &str) -> Self {
        Self {
            arabic: arabic.to_string(),
            english: english.to_string(),
        }
    }
}
