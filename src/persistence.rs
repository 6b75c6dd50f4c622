// File: src/persistence.rs
use crate::core::engine::NameTranslator;
use crate::core::types::NameEntry;
use crate::error::{Result, TranslitError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The serializable state of a translator: only what the user taught it.
#[derive(Clone, Serialize, Deserialize)]
struct SerializableState {
    learned: Vec<NameEntry>,
}

pub fn save_to_disk(translator: &NameTranslator, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        learned: translator.learned_entries(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|source| TranslitError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = state.learned.len(), "saved learned names");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<NameTranslator> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    let mut translator = NameTranslator::new();
    let count = translator.learn_all(state.learned);
    tracing::info!(path = %path.display(), count, "loaded learned names");

    Ok(translator)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameList {
    Map(BTreeMap<String, String>),
    Entries(Vec<NameEntry>),
}

/// Reads a JSON name list, either `{"arabic": "english", ...}` or
/// `[{"arabic": ..., "english": ...}, ...]`.
pub fn import_names_json(path: &Path) -> Result<Vec<NameEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let list: NameList = serde_json::from_reader(reader).map_err(|source| TranslitError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match list {
        NameList::Map(map) => map
            .into_iter()
            .map(|(arabic, english)| NameEntry { arabic, english })
            .collect(),
        NameList::Entries(entries) => entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_learned_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("names.bin");

        let mut translator = NameTranslator::new();
        translator.user_confirms("زيد", "Zaid");
        save_to_disk(&translator, &path).unwrap();

        let restored = load_from_disk(&path).unwrap();
        assert_eq!(restored.translate("زيد"), "Zaid");
        assert_eq!(restored.learned_entries(), translator.learned_entries());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_disk(&dir.path().join("absent.bin"));
        assert!(matches!(result, Err(TranslitError::Io(_))));
    }

    #[test]
    fn truncated_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.bin");
        fs::write(&path, [0x01u8]).unwrap();
        match load_from_disk(&path) {
            Err(e @ TranslitError::Encode(_)) => {
                assert!(e.to_string().starts_with("could not read or write learned names"))
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("truncated file loaded"),
        }
    }

    #[test]
    fn imports_both_json_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let map_path = dir.path().join("map.json");
        fs::write(&map_path, r#"{"زيد": "Zaid", "نوال": "Nawal"}"#).unwrap();
        let list_path = dir.path().join("list.json");
        fs::write(&list_path, r#"[{"arabic": "زيد", "english": "Zayd"}]"#).unwrap();

        let from_map = import_names_json(&map_path).unwrap();
        assert_eq!(from_map.len(), 2);
        let from_list = import_names_json(&list_path).unwrap();
        assert_eq!(from_list, vec![NameEntry::new("زيد", "Zayd")]);
    }

    #[test]
    fn bad_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2").unwrap();
        match import_names_json(&path) {
            Err(TranslitError::Json { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
