use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::models::{IntakeRecord, NewIntake, ProfileRecord};
use crate::store::{IntakeStore, MemoryStore, ProfileStore};

/// A [`MemoryStore`] mirrored to a pretty-printed JSON file.
///
/// Every mutation rewrites the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            MemoryStore::new()
        };

        debug!(
            path = %path.display(),
            profiles = inner.profile_count(),
            intake = inner.intake_count(),
            "opened store"
        );
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.inner)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn load_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>> {
        self.inner.load_profile(user_id)
    }

    fn save_profile(&mut self, record: ProfileRecord) -> Result<()> {
        self.inner.save_profile(record)?;
        self.flush()
    }
}

impl IntakeStore for JsonFileStore {
    fn append_intake(&mut self, intake: NewIntake) -> Result<IntakeRecord> {
        let record = self.inner.append_intake(intake)?;
        self.flush()?;
        Ok(record)
    }

    fn list_intake(&self, user_id: &str, date: NaiveDate) -> Result<Vec<IntakeRecord>> {
        self.inner.list_intake(user_id, date)
    }

    fn delete_intake(&mut self, id: u64) -> Result<bool> {
        let existed = self.inner.delete_intake(id)?;
        if existed {
            self.flush()?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, NutritionItem, sample_profile};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
        assert!(store.load_profile("alice").unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_reopen_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store
                .save_profile(ProfileRecord::start("alice", sample_profile(), now))
                .unwrap();
            let item = NutritionItem::new("Caesar Salad", 345.7, 2.4, 44.1, 17.7, 0.4);
            store
                .append_intake(NewIntake::from_item("alice", date, MealType::Breakfast, &item))
                .unwrap();
        }

        let mut store = JsonFileStore::open(&path).unwrap();
        let record = store.load_profile("alice").unwrap().unwrap();
        assert_eq!(record.profile, sample_profile());
        assert_eq!(record.started_at, now);

        let intake = store.list_intake("alice", date).unwrap();
        assert_eq!(intake.len(), 1);
        assert_eq!(intake[0].item_name, "Caesar Salad");

        // Id counter survives the reopen
        let item = NutritionItem::new("Steak Salad Bowl", 506.7, 16.6, 39.3, 31.3, 2.6);
        let next = store
            .append_intake(NewIntake::from_item("alice", date, MealType::Lunch, &item))
            .unwrap();
        assert_eq!(next.id, 2);
    }
}
