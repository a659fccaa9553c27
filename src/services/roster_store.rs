use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::{calculate_destiny, calculate_life_path};
use crate::models::{NumerologyNumber, Profile};

/// Errors that can occur while loading the roster data source
#[derive(Debug, Error)]
pub enum RosterStoreError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON roster: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML roster: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported roster format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Profile {id}: {indicator} is missing and cannot be computed")]
    MissingIndicator { id: String, indicator: &'static str },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

/// Profile as stored in the data file; indicators may be omitted
#[derive(Debug, Clone, Deserialize)]
struct ProfileRecord {
    id: String,
    name: String,
    age: u8,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    avatar: String,
    #[serde(rename = "birthDate", alias = "birth_date", default)]
    birth_date: Option<String>,
    #[serde(rename = "lifePath", alias = "life_path", default)]
    life_path: Option<NumerologyNumber>,
    #[serde(default)]
    destiny: Option<NumerologyNumber>,
}

impl ProfileRecord {
    /// Fill missing indicators from birth date and name
    fn into_profile(self) -> Result<Profile, RosterStoreError> {
        let life_path = match self.life_path {
            Some(number) => number,
            None => self
                .birth_date
                .as_deref()
                .and_then(calculate_life_path)
                .ok_or_else(|| RosterStoreError::MissingIndicator {
                    id: self.id.clone(),
                    indicator: "lifePath",
                })?,
        };

        let destiny = match self.destiny {
            Some(number) => number,
            None => calculate_destiny(&self.name).ok_or_else(|| RosterStoreError::MissingIndicator {
                id: self.id.clone(),
                indicator: "destiny",
            })?,
        };

        Ok(Profile {
            id: self.id,
            name: self.name,
            age: self.age,
            bio: self.bio,
            avatar: self.avatar,
            birth_date: self.birth_date,
            life_path,
            destiny,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    profiles: Vec<ProfileRecord>,
}

/// Read-only profile roster loaded once at startup
///
/// Profiles keep the order of the data file, which is the "default" sort order.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    profiles: Vec<Profile>,
}

impl RosterStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Load a roster from a `.json` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RosterStoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RosterStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let store = match extension.as_str() {
            "json" => Self::from_json(&contents)?,
            "toml" => Self::from_toml(&contents)?,
            other => return Err(RosterStoreError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!("Loaded {} profiles from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse a JSON array of profile records
    pub fn from_json(contents: &str) -> Result<Self, RosterStoreError> {
        let records: Vec<ProfileRecord> = serde_json::from_str(contents)?;
        Self::from_records(records)
    }

    /// Parse a TOML document with a top-level `profiles` array
    pub fn from_toml(contents: &str) -> Result<Self, RosterStoreError> {
        let file: RosterFile = toml::from_str(contents)?;
        Self::from_records(file.profiles)
    }

    fn from_records(records: Vec<ProfileRecord>) -> Result<Self, RosterStoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut profiles = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(RosterStoreError::DuplicateId(record.id));
            }
            let computed = record.life_path.is_none() || record.destiny.is_none();
            let profile = record.into_profile()?;
            if computed {
                tracing::debug!(
                    "Computed indicators for profile {}: lifePath={}, destiny={}",
                    profile.id,
                    profile.life_path,
                    profile.destiny
                );
            }
            profiles.push(profile);
        }

        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JSON_ROSTER: &str = r#"[
        {"id": "1", "name": "Анна", "age": 28, "birthDate": "1996-03-15", "lifePath": 6, "destiny": 7, "bio": "Йога", "avatar": "👩🏻"},
        {"id": "2", "name": "Anna", "age": 30, "birthDate": "1996-03-15"}
    ]"#;

    #[test]
    fn test_from_json_keeps_precomputed_values() {
        let store = RosterStore::from_json(JSON_ROSTER).unwrap();

        let first = store.get("1").unwrap();
        assert_eq!(first.life_path, NumerologyNumber::Six);
        assert_eq!(first.destiny, NumerologyNumber::Seven);
    }

    #[test]
    fn test_from_json_computes_missing_values() {
        let store = RosterStore::from_json(JSON_ROSTER).unwrap();

        let second = store.get("2").unwrap();
        assert_eq!(second.life_path, NumerologyNumber::Seven);
        assert_eq!(second.destiny, NumerologyNumber::Three);
    }

    #[test]
    fn test_preserves_file_order() {
        let store = RosterStore::from_json(JSON_ROSTER).unwrap();
        let ids: Vec<&str> = store.profiles().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_missing_life_path_without_birth_date() {
        let err = RosterStore::from_json(r#"[{"id": "x", "name": "Anna", "age": 30}]"#).unwrap_err();
        assert!(matches!(err, RosterStoreError::MissingIndicator { indicator: "lifePath", .. }));
    }

    #[test]
    fn test_missing_destiny_for_unmapped_name() {
        let err = RosterStore::from_json(r#"[{"id": "x", "name": "42", "age": 30, "lifePath": 3}]"#).unwrap_err();
        assert!(matches!(err, RosterStoreError::MissingIndicator { indicator: "destiny", .. }));
    }

    #[test]
    fn test_invalid_number_rejected() {
        let err = RosterStore::from_json(r#"[{"id": "x", "name": "Anna", "age": 30, "lifePath": 10, "destiny": 3}]"#)
            .unwrap_err();
        assert!(matches!(err, RosterStoreError::Json(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "1", "name": "Anna", "age": 30, "lifePath": 3, "destiny": 3},
            {"id": "1", "name": "Anna", "age": 30, "lifePath": 3, "destiny": 3}
        ]"#;
        let err = RosterStore::from_json(json).unwrap_err();
        assert!(matches!(err, RosterStoreError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [[profiles]]
            id = "1"
            name = "Максим"
            age = 30
            birth_date = "1994-05-18"
        "#;
        let store = RosterStore::from_toml(toml).unwrap();
        let profile = store.get("1").unwrap();

        // 1+9+9+4+0+5+1+8 = 37 -> 10 -> 1
        assert_eq!(profile.life_path, NumerologyNumber::One);
        assert_eq!(profile.destiny, NumerologyNumber::Eleven);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(JSON_ROSTER.as_bytes()).unwrap();

        let store = RosterStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.yaml");
        std::fs::write(&path, "[]").unwrap();

        let err = RosterStore::load(&path).unwrap_err();
        assert!(matches!(err, RosterStoreError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RosterStore::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, RosterStoreError::Io { .. }));
    }
}
