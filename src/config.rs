// File: src/config.rs
use crate::error::{Result, TranslitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable the binaries read the config path from.
pub const CONFIG_ENV_VAR: &str = "ARABIC_NAMES_CONFIG";

/// What to do with a token whose transliteration comes out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTokenPolicy {
    /// Keep the empty token in the join, leaving a stray space.
    #[default]
    Preserve,
    /// Skip empty tokens before joining.
    Drop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub empty_tokens: EmptyTokenPolicy,
    /// Where learned names are stored between sessions.
    pub dictionary_path: Option<PathBuf>,
    /// JSON name lists merged into the learned names at startup.
    pub import_paths: Vec<PathBuf>,
}

impl TranslatorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| TranslitError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the config, falling back to defaults if it is missing or broken.
    pub fn from_file_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    /// Config named by `ARABIC_NAMES_CONFIG`, or defaults when unset.
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file_or_default(Path::new(&path)),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_fills_defaults() {
        let config: TranslatorConfig = serde_json::from_str(r#"{"empty_tokens":"drop"}"#).unwrap();
        assert_eq!(config.empty_tokens, EmptyTokenPolicy::Drop);
        assert!(config.dictionary_path.is_none());
        assert!(config.import_paths.is_empty());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dictionary_path":"names.bin","import_paths":["a.json"]}}"#).unwrap();
        let config = TranslatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dictionary_path, Some(PathBuf::from("names.bin")));
        assert_eq!(config.import_paths, vec![PathBuf::from("a.json")]);
        assert_eq!(config.empty_tokens, EmptyTokenPolicy::Preserve);
    }

    #[test]
    fn broken_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            TranslatorConfig::from_file(file.path()),
            Err(TranslitError::Json { .. })
        ));
        assert_eq!(TranslatorConfig::from_file_or_default(file.path()), TranslatorConfig::default());
    }
}
