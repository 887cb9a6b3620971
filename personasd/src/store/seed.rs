//! Seed-file loading
//!
//! The seed file is a JSON array of persona objects in the create-request
//! shape (no ids). Every entry goes through the same validation as a POST
//! body, so a bad entry fails startup with a pointer to its index.

use std::path::{Path, PathBuf};

use personas_common::model::{ModelError, NewPersona};
use serde_json::Value;

/// Seed-file loading errors
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {0}: {1}")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse seed file as JSON: {0}")]
    JsonParse(String),

    #[error("Seed file must contain a JSON array of persona objects")]
    NotAnArray,

    #[error("Invalid seed entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ModelError,
    },
}

/// Parse seed-file contents into validated create payloads
pub fn parse_seed(contents: &str) -> Result<Vec<NewPersona>, SeedError> {
    let value: Value =
        serde_json::from_str(contents).map_err(|e| SeedError::JsonParse(e.to_string()))?;

    let entries = value.as_array().ok_or(SeedError::NotAnArray)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            NewPersona::from_json(entry).map_err(|source| SeedError::InvalidEntry { index, source })
        })
        .collect()
}

/// Load and parse a seed file from disk
pub fn load_seed_file(path: &Path) -> Result<Vec<NewPersona>, SeedError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| SeedError::FileRead(path.to_path_buf(), e))?;
    parse_seed(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_valid() {
        let contents = r#"[
            {"nombre": "Ana", "apellido": "García", "edad": 31},
            {"nombre": "Berta", "apellido": "López", "edad": 45, "email": "berta@example.com"}
        ]"#;

        let entries = parse_seed(contents).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].nombre, "Ana");
        assert_eq!(entries[1].email.as_deref(), Some("berta@example.com"));
    }

    #[test]
    fn test_parse_seed_empty_array() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_seed_not_an_array() {
        let result = parse_seed(r#"{"nombre": "Ana"}"#);
        assert!(matches!(result, Err(SeedError::NotAnArray)));
    }

    #[test]
    fn test_parse_seed_invalid_json() {
        let result = parse_seed("not json");
        assert!(matches!(result, Err(SeedError::JsonParse(_))));
    }

    #[test]
    fn test_parse_seed_invalid_entry_reports_index() {
        let contents = r#"[
            {"nombre": "Ana", "apellido": "García", "edad": 31},
            {"nombre": "Berta"}
        ]"#;

        match parse_seed(contents) {
            Err(SeedError::InvalidEntry { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected InvalidEntry, got {:?}", other),
        }
    }
}
