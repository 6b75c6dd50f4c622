// File: src/core/dictionary.rs
use crate::core::names::BUILTIN_NAMES;
use crate::core::normalizer::{clean, is_space};
use crate::core::types::{ArabicKey, NameEntry};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<NameDictionary> =
    Lazy::new(|| NameDictionary::from_pairs(BUILTIN_NAMES.iter().copied()));

/// Exact-name lookup from a normalized Arabic key to a Latin rendering.
///
/// Keys are normalized on insertion, so lookups must be made with
/// already-normalized text. A later entry for the same key replaces the
/// earlier one without complaint.
#[derive(Debug, Clone, Default)]
pub struct NameDictionary {
    entries: HashMap<ArabicKey, String>,
}

impl NameDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The curated dictionary shipped with the crate, built once per process.
    pub fn builtin() -> &'static NameDictionary {
        &BUILTIN
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut dictionary = Self::new();
        for (arabic, english) in pairs {
            dictionary.insert(arabic, english);
        }
        dictionary
    }

    /// Inserts a mapping, returning `false` when either side is blank.
    pub fn insert(&mut self, arabic: &str, english: &str) -> bool {
        let key = clean(arabic);
        let value = english.trim_matches(is_space);
        if key.is_empty() || value.is_empty() {
            return false;
        }
        self.entries.insert(key, value.to_string());
        true
    }

    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Snapshot of all entries, sorted by key for stable output.
    pub fn to_entries(&self) -> Vec<NameEntry> {
        let mut entries: Vec<NameEntry> = self
            .iter()
            .map(|(arabic, english)| NameEntry::new(arabic, english))
            .collect();
        entries.sort_by(|a, b| a.arabic.cmp(&b.arabic));
        entries
    }
}

impl FromIterator<NameEntry> for NameDictionary {
    fn from_iter<T: IntoIterator<Item = NameEntry>>(iter: T) -> Self {
        let mut dictionary = Self::new();
        for entry in iter {
            dictionary.insert(&entry.arabic, &entry.english);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_normalized() {
        let dict = NameDictionary::builtin();
        assert_eq!(dict.get("احمد"), Some("Ahmed"));
        assert_eq!(dict.get("فاطمه"), Some("Fatima"));
        assert_eq!(dict.get("أحمد"), None);
    }

    #[test]
    fn duplicate_source_keys_collapse() {
        let dict = NameDictionary::builtin();
        let with_duplicates = BUILTIN_NAMES.len();
        assert_eq!(dict.len(), with_duplicates - 2);
        assert_eq!(dict.get("سالم"), Some("Salem"));
        assert_eq!(dict.get("راشد"), Some("Rashid"));
    }

    #[test]
    fn later_insert_overwrites() {
        let dict = NameDictionary::from_pairs([("سالم", "Salim"), ("سالم", "Salem")]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("سالم"), Some("Salem"));
    }

    #[test]
    fn blank_entries_are_rejected() {
        let mut dict = NameDictionary::new();
        assert!(!dict.insert("", "Nobody"));
        assert!(!dict.insert("محمد", "  "));
        assert!(dict.is_empty());
    }

    #[test]
    fn no_builtin_value_is_empty() {
        assert!(NameDictionary::builtin().iter().all(|(_, v)| !v.is_empty()));
    }
}
