//! JSON-file persistence
//!
//! Durable local storage for the two persisted slices. Each key maps to one
//! JSON file inside a data directory; the file names reuse the storage keys
//! the original browser build used for `localStorage`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use miniseller_core::persistence::ports::PreferencesStore;
use miniseller_domain::constants::{OPPORTUNITIES_KEY, UI_PREFERENCES_KEY};
use miniseller_domain::{Opportunity, Result, SellerError, UiPreferences};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// [`PreferencesStore`] adapter over a directory of JSON files.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) the data directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|err| {
            SellerError::Persistence(format!(
                "failed to create data directory {}: {err}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_slice<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(SellerError::Persistence(format!(
                    "failed to read {}: {err}",
                    path.display()
                )))
            }
        };
        serde_json::from_str(&raw).map(Some).map_err(|err| {
            SellerError::Persistence(format!("failed to parse {}: {err}", path.display()))
        })
    }

    fn write_slice<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(value).map_err(|err| {
            SellerError::Persistence(format!("failed to serialize {key}: {err}"))
        })?;
        std::fs::write(&path, raw).map_err(|err| {
            SellerError::Persistence(format!("failed to write {}: {err}", path.display()))
        })
    }

    /// The directory files are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PreferencesStore for JsonFileStore {
    fn load_preferences(&self) -> Result<Option<UiPreferences>> {
        self.read_slice(UI_PREFERENCES_KEY)
    }

    fn save_preferences(&self, preferences: &UiPreferences) -> Result<()> {
        self.write_slice(UI_PREFERENCES_KEY, preferences)
    }

    fn load_opportunities(&self) -> Result<Option<Vec<Opportunity>>> {
        self.read_slice(OPPORTUNITIES_KEY)
    }

    fn save_opportunities(&self, opportunities: &[Opportunity]) -> Result<()> {
        self.write_slice(OPPORTUNITIES_KEY, &opportunities)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use miniseller_domain::StatusFilter;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_files_read_as_none() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path()).expect("open store");
        assert_eq!(store.load_preferences().expect("load"), None);
        assert_eq!(store.load_opportunities().expect("load"), None);
    }

    #[test]
    fn preferences_round_trip() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path()).expect("open store");
        let written = UiPreferences {
            search_query: "acme".to_string(),
            status_filter: StatusFilter::Converted,
            sort_by_score: true,
        };
        store.save_preferences(&written).expect("save");
        assert_eq!(store.load_preferences().expect("load"), Some(written));
    }

    #[test]
    fn opportunities_round_trip() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path()).expect("open store");
        let written = vec![Opportunity {
            id: "opp-a-1700000000000-0".to_string(),
            lead_id: "a".to_string(),
            name: "Ada".to_string(),
            company: "Engines".to_string(),
            amount: Some(12_500.0),
            created_at: Utc::now(),
        }];
        store.save_opportunities(&written).expect("save");
        assert_eq!(store.load_opportunities().expect("load"), Some(written));
    }

    #[test]
    fn malformed_file_is_a_persistence_error() {
        let dir = tempdir().expect("temp dir");
        let store = JsonFileStore::new(dir.path()).expect("open store");
        std::fs::write(
            dir.path().join(format!("{UI_PREFERENCES_KEY}.json")),
            "not json at all",
        )
        .expect("write garbage");

        let err = store.load_preferences().expect_err("malformed fails");
        assert!(matches!(err, SellerError::Persistence(_)));
    }
}
