use crate::config::{EmptyTokenPolicy, TranslatorConfig};
use crate::core::converter::TransliterationEngine;
use crate::core::dictionary::NameDictionary;
use crate::core::types::NameEntry;
use crate::core::{detect, normalizer};
use crate::error::Result;
use crate::learning::{LearningEngine, NameConfirmation};
use crate::persistence::{import_names_json, load_from_disk, save_to_disk};
use std::path::{Path, PathBuf};

// The translator composes the curated dictionary, the names the user has
// confirmed, and the letter-by-letter fallback.
pub struct NameTranslator {
    builtin: &'static NameDictionary,
    pub learned: NameDictionary,
    pub converter: TransliterationEngine,
    learning_engine: LearningEngine,
    empty_tokens: EmptyTokenPolicy,
    dictionary_path: Option<PathBuf>,
}

impl NameTranslator {
    pub fn new() -> Self {
        Self {
            builtin: NameDictionary::builtin(),
            learned: NameDictionary::new(),
            converter: TransliterationEngine::new(),
            learning_engine: LearningEngine::new(),
            empty_tokens: EmptyTokenPolicy::default(),
            dictionary_path: None,
        }
    }

    pub fn with_empty_tokens(mut self, policy: EmptyTokenPolicy) -> Self {
        self.empty_tokens = policy;
        self
    }

    pub fn from_file_or_new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut translator = match load_from_disk(path) {
            Ok(translator) => translator,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "starting with no learned names");
                }
                Self::new()
            }
        };
        translator.dictionary_path = Some(path.to_path_buf());
        translator
    }

    /// Builds a translator from config. Unreadable stores or import lists
    /// are logged and skipped.
    pub fn from_config(config: &TranslatorConfig) -> Self {
        let translator = match &config.dictionary_path {
            Some(path) => Self::from_file_or_new(path),
            None => Self::new(),
        };
        let mut translator = translator.with_empty_tokens(config.empty_tokens);

        for path in &config.import_paths {
            match import_names_json(path) {
                Ok(entries) => {
                    let count = translator.learn_all(entries);
                    tracing::info!(path = %path.display(), count, "imported names");
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping name list"),
            }
        }
        translator
    }

    /// Renders a name in Latin script.
    ///
    /// A whole-string dictionary hit wins over token-by-token translation,
    /// so compound names stored verbatim keep their curated spelling.
    pub fn translate(&self, name: &str) -> String {
        if name.chars().all(normalizer::is_space) {
            return String::new();
        }

        let normalized = normalizer::clean(name);
        if let Some(english) = self.lookup(&normalized) {
            return english.to_string();
        }

        let parts: Vec<String> = normalized
            .split(normalizer::is_space)
            .filter(|token| !token.is_empty())
            .map(|token| self.translate_token(token))
            .filter(|part| self.empty_tokens == EmptyTokenPolicy::Preserve || !part.is_empty())
            .collect();

        parts.join(" ")
    }

    fn translate_token(&self, token: &str) -> String {
        match self.lookup(token) {
            Some(english) => english.to_string(),
            None => {
                let spelled = self.converter.transliterate(token);
                tracing::debug!(token, spelled = %spelled, "no dictionary entry, transliterated");
                spelled
            }
        }
    }

    /// Learned names shadow the builtin dictionary.
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.learned
            .get(normalized)
            .or_else(|| self.builtin.get(normalized))
    }

    pub fn is_arabic(&self, text: &str) -> bool {
        detect::is_arabic(text)
    }

    pub fn clean(&self, text: &str) -> String {
        normalizer::clean(text)
    }

    pub fn transliterate(&self, token: &str) -> String {
        self.converter.transliterate(token)
    }

    pub fn user_confirms(&mut self, arabic: &str, english: &str) -> bool {
        if arabic.chars().all(normalizer::is_space) || english.chars().all(normalizer::is_space) {
            return false;
        }
        let confirmation = NameConfirmation {
            arabic: arabic.to_string(),
            english: english.to_string(),
        };
        self.learning_engine.learn(&mut self.learned, &confirmation)
    }

    /// Learns every entry, returning how many were stored.
    pub fn learn_all<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = NameEntry>,
    {
        let mut stored = 0;
        for confirmation in entries.into_iter().map(NameConfirmation::from) {
            if self.learning_engine.learn(&mut self.learned, &confirmation) {
                stored += 1;
            }
        }
        stored
    }

    pub fn learned_entries(&self) -> Vec<NameEntry> {
        self.learned.to_entries()
    }

    pub fn dictionary_path(&self) -> Option<&Path> {
        self.dictionary_path.as_deref()
    }

    pub fn save_dictionary(&self) -> Result<()> {
        if let Some(path) = &self.dictionary_path {
            save_to_disk(self, path)
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}

impl Default for NameTranslator {
    fn default() -> Self {
        Self::new()
    }
}
