use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{IntakeRecord, NewIntake, ProfileRecord};
use crate::store::{IntakeStore, ProfileStore};

/// In-process store keyed by user id and record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    profiles: HashMap<String, ProfileRecord>,
    /// Keyed by id so iteration follows insertion order.
    #[serde(default)]
    intake: BTreeMap<u64, IntakeRecord>,
    #[serde(default = "first_id")]
    next_intake_id: u64,
}

fn first_id() -> u64 {
    1
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            profiles: HashMap::new(),
            intake: BTreeMap::new(),
            next_intake_id: first_id(),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn intake_count(&self) -> usize {
        self.intake.len()
    }
}

impl ProfileStore for MemoryStore {
    fn load_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>> {
        Ok(self.profiles.get(user_id).cloned())
    }

    fn save_profile(&mut self, record: ProfileRecord) -> Result<()> {
        self.profiles.insert(record.user_id.clone(), record);
        Ok(())
    }
}

impl IntakeStore for MemoryStore {
    fn append_intake(&mut self, intake: NewIntake) -> Result<IntakeRecord> {
        let id = self.next_intake_id;
        self.next_intake_id += 1;

        let record = intake.with_id(id);
        self.intake.insert(id, record.clone());
        Ok(record)
    }

    fn list_intake(&self, user_id: &str, date: NaiveDate) -> Result<Vec<IntakeRecord>> {
        Ok(self
            .intake
            .values()
            .filter(|r| r.user_id == user_id && r.date == date)
            .cloned()
            .collect())
    }

    fn delete_intake(&mut self, id: u64) -> Result<bool> {
        Ok(self.intake.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, NutritionItem, sample_profile};
    use chrono::{TimeZone, Utc};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn intake(user: &str, day: u32, name: &str) -> NewIntake {
        let item = NutritionItem::new(name, 400.0, 40.0, 30.0, 10.0, 5.0);
        NewIntake::from_item(user, date(day), MealType::Lunch, &item)
    }

    #[test]
    fn test_profile_save_and_replace() {
        let mut store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert!(store.load_profile("alice").unwrap().is_none());

        store
            .save_profile(ProfileRecord::start("alice", sample_profile(), now))
            .unwrap();
        let mut updated = store.load_profile("alice").unwrap().unwrap();
        updated.profile.current_weight_kg = 70.0;
        store.save_profile(updated).unwrap();

        let reloaded = store.load_profile("alice").unwrap().unwrap();
        assert_eq!(reloaded.profile.current_weight_kg, 70.0);
        assert_eq!(reloaded.start_weight_kg, 71.2);
        assert_eq!(store.profile_count(), 1);
    }

    #[test]
    fn test_intake_ids_increase() {
        let mut store = MemoryStore::new();
        let first = store.append_intake(intake("alice", 1, "A")).unwrap();
        let second = store.append_intake(intake("alice", 1, "B")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_list_filters_by_user_and_date() {
        let mut store = MemoryStore::new();
        store.append_intake(intake("alice", 1, "A")).unwrap();
        store.append_intake(intake("bob", 1, "B")).unwrap();
        store.append_intake(intake("alice", 2, "C")).unwrap();
        store.append_intake(intake("alice", 1, "D")).unwrap();

        let names: Vec<String> = store
            .list_intake("alice", date(1))
            .unwrap()
            .into_iter()
            .map(|r| r.item_name)
            .collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        let record = store.append_intake(intake("alice", 1, "A")).unwrap();
        assert!(store.delete_intake(record.id).unwrap());
        assert!(!store.delete_intake(record.id).unwrap());
        assert_eq!(store.intake_count(), 0);

        // Ids are not reused after deletion
        let next = store.append_intake(intake("alice", 1, "B")).unwrap();
        assert_eq!(next.id, 2);
    }
}
