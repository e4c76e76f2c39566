//! Never-throws draft persistence facade
//!
//! Drafts are advisory convenience state: the in-memory form owned by the
//! caller stays the source of truth for the active session. A failed save
//! must never block or corrupt that session, so every failure mode here
//! degrades to "as if no draft" and is reported through the log instead of
//! the return type.

use serde::{de::DeserializeOwned, Serialize};

use crate::data::{Database, DraftRecordStore};
use crate::store::error::DraftStoreError;
use crate::store::key::DraftKey;

/// Draft persistence facade over the key-value data layer
#[derive(Clone)]
pub struct DraftStore {
    /// None when the backing database could not be opened; all operations
    /// then no-op.
    records: Option<DraftRecordStore>,
}

impl DraftStore {
    /// Create a store over an open database
    pub fn new(db: &Database) -> Self {
        Self {
            records: Some(DraftRecordStore::new(db.connection())),
        }
    }

    /// Open the store at the default location.
    ///
    /// If the database cannot be opened the store comes up disabled: every
    /// save/load/clear no-ops for the rest of the process. The caller's
    /// forms keep working, they just lose persistence across restarts.
    pub fn open_default() -> Self {
        match Database::open_default() {
            Ok(db) => Self::new(&db),
            Err(e) => {
                tracing::error!(error = %e, "Draft storage unavailable, drafts disabled");
                Self { records: None }
            }
        }
    }

    /// Persist a draft under the given key, replacing any prior value.
    ///
    /// After a successful save, a `load` of the same key returns a value
    /// equal to `draft`. On failure the prior stored value (if any) is left
    /// untouched and the failure is logged, not returned.
    pub fn save<T: Serialize>(&self, key: &DraftKey, draft: &T) {
        if let Err(e) = self.try_save(key, draft) {
            tracing::warn!(key = %key, error = %e, "Failed to save draft");
        }
    }

    /// Load the last successfully saved draft for the key.
    ///
    /// Returns None when nothing was saved, storage is unavailable, or the
    /// stored value no longer deserializes. No side effects: an unreadable
    /// row stays put until the next save overwrites it or a clear removes
    /// it, and reads back as absent in the meantime.
    pub fn load<T: DeserializeOwned>(&self, key: &DraftKey) -> Option<T> {
        match self.try_load(key) {
            Ok(draft) => draft,
            Err(DraftStoreError::Deserialize(e)) => {
                tracing::warn!(key = %key, error = %e, "Stored draft is unreadable, treating as absent");
                None
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to load draft");
                None
            }
        }
    }

    /// Remove any stored draft for the key. Clearing an absent key is a
    /// no-op; failures are logged, not returned.
    pub fn clear(&self, key: &DraftKey) {
        match self.records() {
            Ok(records) => {
                if let Err(e) = records.delete(key.as_str()) {
                    tracing::warn!(key = %key, error = %e, "Failed to clear draft");
                }
            }
            Err(e) => {
                tracing::debug!(key = %key, error = %e, "Skipping clear, storage disabled");
            }
        }
    }

    /// Access the raw record layer, when storage is available. Used by the
    /// CLI for listing and by tests that inject rows directly.
    pub fn raw(&self) -> Option<&DraftRecordStore> {
        self.records.as_ref()
    }

    fn records(&self) -> Result<&DraftRecordStore, DraftStoreError> {
        self.records.as_ref().ok_or(DraftStoreError::Unavailable)
    }

    fn try_save<T: Serialize>(&self, key: &DraftKey, draft: &T) -> Result<(), DraftStoreError> {
        let records = self.records()?;
        let value = serde_json::to_string(draft).map_err(DraftStoreError::Serialize)?;
        records.set(key.as_str(), &value)?;
        Ok(())
    }

    fn try_load<T: DeserializeOwned>(
        &self,
        key: &DraftKey,
    ) -> Result<Option<T>, DraftStoreError> {
        let records = self.records()?;
        match records.get(key.as_str())? {
            Some(value) => {
                let draft =
                    serde_json::from_str(&value).map_err(DraftStoreError::Deserialize)?;
                Ok(Some(draft))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProgramDraft;
    use crate::store::key::DraftKind;
    use tempfile::tempdir;

    fn setup_store() -> (tempfile::TempDir, Database, DraftStore) {
        let dir = tempdir().unwrap();
        let db = Database::open(dir.path().join("test.db")).unwrap();
        let store = DraftStore::new(&db);
        (dir, db, store)
    }

    fn program_key(user: Option<&str>) -> DraftKey {
        DraftKey::new(DraftKind::Program, user, None)
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (_dir, _db, store) = setup_store();
        let key = program_key(Some("u42"));

        let draft = ProgramDraft {
            title: "Test Program".to_string(),
            ..Default::default()
        };
        store.save(&key, &draft);

        let loaded: ProgramDraft = store.load(&key).unwrap();
        assert_eq!(loaded, draft);
    }

    #[test]
    fn test_second_save_replaces_first() {
        let (_dir, _db, store) = setup_store();
        let key = program_key(Some("u1"));

        let first = ProgramDraft {
            title: "First".to_string(),
            keywords: vec!["zk".to_string()],
            ..Default::default()
        };
        let second = ProgramDraft {
            title: "Second".to_string(),
            ..Default::default()
        };
        store.save(&key, &first);
        store.save(&key, &second);

        // Full replacement, no field merging
        let loaded: ProgramDraft = store.load(&key).unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.keywords.is_empty());
    }

    #[test]
    fn test_load_absent_key() {
        let (_dir, _db, store) = setup_store();
        let loaded: Option<ProgramDraft> = store.load(&program_key(Some("nobody")));
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_keys_are_isolated_per_user() {
        let (_dir, _db, store) = setup_store();

        let draft = ProgramDraft {
            title: "Mine".to_string(),
            ..Default::default()
        };
        store.save(&program_key(Some("u1")), &draft);

        let other: Option<ProgramDraft> = store.load(&program_key(Some("u2")));
        assert_eq!(other, None);
    }

    #[test]
    fn test_anon_and_user_scopes_do_not_mix() {
        let (_dir, _db, store) = setup_store();

        let draft = ProgramDraft {
            title: "Before login".to_string(),
            ..Default::default()
        };
        store.save(&program_key(None), &draft);

        let as_user: Option<ProgramDraft> = store.load(&program_key(Some("u1")));
        assert_eq!(as_user, None);

        let as_anon: Option<ProgramDraft> = store.load(&program_key(None));
        assert_eq!(as_anon, Some(draft));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, _db, store) = setup_store();
        let key = program_key(Some("u1"));

        store.save(
            &key,
            &ProgramDraft {
                title: "Gone soon".to_string(),
                ..Default::default()
            },
        );
        store.clear(&key);
        store.clear(&key);

        let loaded: Option<ProgramDraft> = store.load(&key);
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_corrupt_row_loads_as_none() {
        let (_dir, _db, store) = setup_store();
        let key = program_key(Some("u1"));

        // Write a non-JSON value underneath the facade
        let raw = store.raw().unwrap();
        raw.set(key.as_str(), "not json {{").unwrap();

        let loaded: Option<ProgramDraft> = store.load(&key);
        assert_eq!(loaded, None);

        // A fresh save recovers the key
        let draft = ProgramDraft {
            title: "Recovered".to_string(),
            ..Default::default()
        };
        store.save(&key, &draft);
        assert_eq!(store.load::<ProgramDraft>(&key), Some(draft));
    }

    #[test]
    fn test_disabled_store_noops() {
        let store = DraftStore { records: None };
        let key = program_key(Some("u1"));

        store.save(
            &key,
            &ProgramDraft {
                title: "Lost".to_string(),
                ..Default::default()
            },
        );
        store.clear(&key);
        let loaded: Option<ProgramDraft> = store.load(&key);
        assert_eq!(loaded, None);
    }
}
