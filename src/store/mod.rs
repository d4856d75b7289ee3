//! Persistence ports for profiles and intake records.
//!
//! The planner never touches storage; callers load a profile through a
//! [`ProfileStore`], compute, and hand any selection to an [`IntakeStore`].

mod json_file;
mod memory;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{IntakeRecord, NewIntake, ProfileRecord};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub trait ProfileStore {
    fn load_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>>;

    /// Insert or replace the profile for `record.user_id`.
    fn save_profile(&mut self, record: ProfileRecord) -> Result<()>;
}

pub trait IntakeStore {
    /// Store a record, assigning it the next id.
    fn append_intake(&mut self, intake: NewIntake) -> Result<IntakeRecord>;

    /// Records for a user on a date, in insertion order.
    fn list_intake(&self, user_id: &str, date: NaiveDate) -> Result<Vec<IntakeRecord>>;

    /// Returns whether a record with `id` existed.
    fn delete_intake(&mut self, id: u64) -> Result<bool>;
}
