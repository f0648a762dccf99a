//! Catalog file loading.
//!
//! The on-disk format is a JSON array of activity records (see
//! [`ActivityRecord`](super::ActivityRecord)). A missing file surfaces as
//! [`Error::NotFound`] so callers can distinguish "no catalog" from "bad
//! catalog"; it is never papered over with a default.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use super::activity::ActivityRecord;
use super::catalog::ActivityCatalog;
use crate::error::{Error, Result};

/// Loads and validates a catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ActivityCatalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    read_catalog(BufReader::new(file))
}

/// Loads and validates a catalog from any reader producing JSON.
pub fn read_catalog(reader: impl Read) -> Result<ActivityCatalog> {
    let records: Vec<ActivityRecord> = serde_json::from_reader(reader)?;
    ActivityCatalog::from_records(records)
}

/// Serializes a catalog back to its canonical wire form.
pub fn catalog_to_json(catalog: &ActivityCatalog) -> Result<String> {
    let records: Vec<ActivityRecord> =
        catalog.iter().cloned().map(ActivityRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        { "name": "Barbells", "duration": 3, "resourceCost": 60, "skillPoints": 180 },
        { "name": "Passing", "duration": 1, "resourceCost": 15,
          "skillYield": { "technique": 20, "vision": 16 } },
        { "name": "Cooldown", "duration": 1, "resourceCost": -13 }
    ]"#;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SAMPLE.as_bytes())
            .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("Barbells").unwrap().total_yield(), 180);
        assert!(catalog.get("Cooldown").unwrap().is_recovery());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = read_catalog("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_invalid_record_is_validation_error() {
        let json = r#"[ { "name": "X", "duration": 0, "resourceCost": 5 } ]"#;
        let err = read_catalog(json.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_roundtrip_canonical_form() {
        let catalog = read_catalog(SAMPLE.as_bytes()).unwrap();
        let json = catalog_to_json(&catalog).unwrap();
        let again = read_catalog(json.as_bytes()).unwrap();
        assert_eq!(catalog, again);
    }
}
