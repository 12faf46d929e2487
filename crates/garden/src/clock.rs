//! Source of "today" for streak bookkeeping.

use bevy::prelude::*;
use chrono::{NaiveDate, Utc};

/// Calendar clock used when a habit is completed.
///
/// Dates are UTC calendar dates with no time component. Tests pin the date
/// with [`GardenClock::fixed`].
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GardenClock {
    fixed: Option<NaiveDate>,
}

impl GardenClock {
    pub fn fixed(date: NaiveDate) -> Self {
        Self { fixed: Some(date) }
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(GardenClock::fixed(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_a_plausible_date() {
        let today = GardenClock::default().today();
        assert!(today > NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }
}
