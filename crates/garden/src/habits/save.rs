//! Persisted implementation for `HabitStore`.
//!
//! Stored as a JSON array of habit objects under `gardenHabits`. Anything that
//! does not parse into that shape (not JSON, wrong field types, a negative
//! streak, an unknown frequency) is treated as malformed and replaced by the
//! seed set.

use bevy::prelude::*;

use crate::config::HABITS_KEY;
use crate::content::GardenContent;
use crate::sample_data::sample_habits;
use crate::storage::StorageError;
use crate::Persisted;

use super::types::{Habit, HabitStore};

impl Persisted for HabitStore {
    const STORAGE_KEY: &'static str = HABITS_KEY;

    fn seed(world: &World) -> Self {
        let habits = world
            .get_resource::<GardenContent>()
            .map(|content| content.habit_seed.clone())
            .unwrap_or_else(sample_habits);
        HabitStore::new(habits)
    }

    fn to_stored(&self) -> Result<String, StorageError> {
        serde_json::to_string(self.habits()).map_err(|e| StorageError::Encode(e.to_string()))
    }

    fn from_stored(raw: &str) -> Result<Self, StorageError> {
        let habits: Vec<Habit> =
            serde_json::from_str(raw).map_err(|e| StorageError::Decode(e.to_string()))?;
        Ok(HabitStore::new(habits))
    }
}
