use std::fmt;

use bevy::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Searchable;
use crate::config::{STREAK_FORTNIGHT, STREAK_MONTH, STREAK_WEEK};

// =============================================================================
// Habit
// =============================================================================

/// Intended cadence of a habit. Advisory only, nothing schedules it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        }
    }
}

/// A recurring gardening habit. Stored as camelCase JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub frequency: Frequency,
    pub category: String,
    pub streak: u32,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<NaiveDate>,
    pub icon: String,
}

impl Habit {
    pub fn streak_tier(&self) -> StreakTier {
        StreakTier::from_streak(self.streak)
    }
}

impl Searchable for Habit {
    fn matches_query(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self.category.to_lowercase().contains(query_lower)
    }

    fn category_key(&self) -> &str {
        &self.category
    }
}

/// Display tier of a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StreakTier {
    Starting,
    Week,
    Fortnight,
    Month,
}

impl StreakTier {
    pub fn from_streak(streak: u32) -> Self {
        if streak >= STREAK_MONTH {
            StreakTier::Month
        } else if streak >= STREAK_FORTNIGHT {
            StreakTier::Fortnight
        } else if streak >= STREAK_WEEK {
            StreakTier::Week
        } else {
            StreakTier::Starting
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitError {
    NotFound(String),
}

impl fmt::Display for HabitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitError::NotFound(id) => write!(f, "No habit with id '{id}'"),
        }
    }
}

impl std::error::Error for HabitError {}

// =============================================================================
// HabitStore
// =============================================================================

/// The user's habits. Persisted under `gardenHabits` after every change.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Flip `completed`. Completing increments the streak and stamps
    /// `last_completed` with `today`; un-completing leaves both alone.
    pub fn toggle(&mut self, id: &str, today: NaiveDate) -> Result<&Habit, HabitError> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| HabitError::NotFound(id.to_string()))?;
        if habit.completed {
            habit.completed = false;
        } else {
            habit.completed = true;
            habit.streak = habit.streak.saturating_add(1);
            habit.last_completed = Some(today);
        }
        Ok(&*habit)
    }

    pub fn completed_count(&self) -> usize {
        self.habits.iter().filter(|h| h.completed).count()
    }

    /// Percentage of completed habits, rounded. 0 for an empty store.
    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.completed_count(), self.len())
    }

    /// `"all"` followed by the distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        crate::catalog::categories(&self.habits)
    }
}

/// `round(100 * completed / total)`, 0 when `total` is 0.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

