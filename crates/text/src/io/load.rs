//! Load functionality for the engine tables.
//!
//! This module reads and validates the two JSON data files. Validation
//! failures are table bugs, so loading fails fast instead of building an
//! engine over bad data.

use super::format::{AlphabetRecord, AlphabetRecords, ConfusablesMap};
use secwe_core::{Alphabet, AlphabetEntry, ConfusablesTable, EngineError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Standard file name for the alphabet table.
pub const ALPHABET_FILE: &str = "alphabet.json";
/// Standard file name for the confusables table.
pub const CONFUSABLES_FILE: &str = "confusables.json";

/// Table loader - reads alphabet and confusables data files.
pub struct TableLoader;

impl TableLoader {
    /// Load and validate an alphabet table from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to an alphabet file (array of character/rank records)
    pub fn load_alphabet(path: &Path) -> Result<Alphabet> {
        let file = File::open(path).map_err(|e| EngineError::Io {
            path: path.to_path_buf(),
            err: e,
        })?;
        let reader = BufReader::new(file);
        let records: AlphabetRecords = serde_json::from_reader(reader).map_err(|e| {
            EngineError::Load(format!(
                "Failed to parse alphabet file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::alphabet_from_records(records)
    }

    /// Parse and validate an alphabet table from in-memory JSON.
    pub fn parse_alphabet(json: &str) -> Result<Alphabet> {
        let records: AlphabetRecords = serde_json::from_str(json)?;
        Self::alphabet_from_records(records)
    }

    /// Load and validate a confusables table from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to a confusables file (object mapping keys to
    ///   canonical forms)
    pub fn load_confusables(path: &Path) -> Result<ConfusablesTable> {
        let file = File::open(path).map_err(|e| EngineError::Io {
            path: path.to_path_buf(),
            err: e,
        })?;
        let reader = BufReader::new(file);
        let map: ConfusablesMap = serde_json::from_reader(reader).map_err(|e| {
            EngineError::Load(format!(
                "Failed to parse confusables file {}: {}",
                path.display(),
                e
            ))
        })?;
        ConfusablesTable::new(map)
    }

    /// Parse and validate a confusables table from in-memory JSON.
    pub fn parse_confusables(json: &str) -> Result<ConfusablesTable> {
        let map: ConfusablesMap = serde_json::from_str(json)?;
        ConfusablesTable::new(map)
    }

    /// Load both tables from a directory using the standard file names.
    pub fn load_dir(dir: &Path) -> Result<(Alphabet, ConfusablesTable)> {
        let alphabet = Self::load_alphabet(&dir.join(ALPHABET_FILE))?;
        let confusables = Self::load_confusables(&dir.join(CONFUSABLES_FILE))?;
        Ok((alphabet, confusables))
    }

    fn alphabet_from_records(records: AlphabetRecords) -> Result<Alphabet> {
        let entries = records
            .into_iter()
            .map(|AlphabetRecord { character, rank }| AlphabetEntry::new(character, rank))
            .collect();
        Alphabet::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_dir_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        fs::write(
            dir.path().join(ALPHABET_FILE),
            r#"[
                { "character": "a", "rank": 0 },
                { "character": "kw", "rank": 1 },
                { "character": "k", "rank": 2 }
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(CONFUSABLES_FILE),
            r#"{ "'": "̓" }"#,
        )
        .unwrap();

        let (alphabet, confusables) = TableLoader::load_dir(dir.path()).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.rank_of("kw"), 1);
        assert_eq!(confusables.len(), 1);
        assert_eq!(confusables.normalize("k'a"), "k\u{0313}a");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = TableLoader::load_alphabet(&dir.path().join("missing.json"));
        match result {
            Err(EngineError::Io { path, .. }) => {
                assert!(path.ends_with("missing.json"));
            }
            other => panic!("expected Io error, got {:?}", other.map(|a| a.len())),
        }
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ALPHABET_FILE);
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            TableLoader::load_alphabet(&path),
            Err(EngineError::Load(_))
        ));
    }

    #[test]
    fn test_invalid_table_fails_validation() {
        let json = r#"[
            { "character": "a", "rank": 0 },
            { "character": "a", "rank": 1 }
        ]"#;
        assert!(matches!(
            TableLoader::parse_alphabet(json),
            Err(EngineError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_parse_confusables_validates() {
        assert!(matches!(
            TableLoader::parse_confusables(r#"{ "x": "x" }"#),
            Err(EngineError::InvalidConfusables(_))
        ));
    }
}
