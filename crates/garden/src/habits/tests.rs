use chrono::NaiveDate;

use super::*;
use crate::catalog::CategoryFilter;
use crate::sample_data::sample_habits;
use crate::storage::StorageError;
use crate::Persisted;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 18).unwrap()
}

fn sample_store() -> HabitStore {
    HabitStore::new(sample_habits())
}

fn habit(id: &str, streak: u32, completed: bool) -> Habit {
    Habit {
        id: id.to_string(),
        title: format!("Habit {id}"),
        description: "Keep the beds tidy".to_string(),
        frequency: Frequency::Daily,
        category: "Maintenance".to_string(),
        streak,
        completed,
        last_completed: None,
        icon: "🌱".to_string(),
    }
}

// =============================================================================
// Toggle
// =============================================================================

#[test]
fn test_toggle_completes_and_increments_streak() {
    let mut store = HabitStore::new(vec![habit("a", 5, false)]);
    let toggled = store.toggle("a", today()).unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.streak, 6);
    assert_eq!(toggled.last_completed, Some(today()));
}

#[test]
fn test_toggle_off_keeps_streak_and_date() {
    let mut store = HabitStore::new(vec![habit("a", 5, false)]);
    store.toggle("a", today()).unwrap();

    let later = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
    let toggled = store.toggle("a", later).unwrap();
    assert!(!toggled.completed);
    assert_eq!(toggled.streak, 6);
    assert_eq!(toggled.last_completed, Some(today()));
}

#[test]
fn test_toggle_saturates_streak_at_max() {
    let raw = r#"[{"id":"1","title":"Water","description":"d","frequency":"daily",
        "category":"Watering","streak":4294967295,"completed":false,"icon":"💧"}]"#;
    let mut store = HabitStore::from_stored(raw).unwrap();
    let toggled = store.toggle("1", today()).unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.streak, u32::MAX);
    assert_eq!(toggled.last_completed, Some(today()));
}

#[test]
fn test_toggle_unknown_id_is_not_found() {
    let mut store = sample_store();
    let before = store.clone();
    assert_eq!(
        store.toggle("42", today()).unwrap_err(),
        HabitError::NotFound("42".to_string())
    );
    assert_eq!(store, before);
}

#[test]
fn test_toggle_only_touches_target() {
    let mut store = sample_store();
    let before = store.clone();
    store.toggle("3", today()).unwrap();

    for (old, new) in before.habits().iter().zip(store.habits()) {
        if old.id != "3" {
            assert_eq!(old, new);
        }
    }
}

// =============================================================================
// Derived values
// =============================================================================

#[test]
fn test_completion_rate_sample_data() {
    let store = sample_store();
    assert_eq!(store.completed_count(), 3);
    assert_eq!(store.completion_rate(), 38); // round(37.5)
}

#[test]
fn test_completion_rate_rounding() {
    assert_eq!(completion_rate(2, 8), 25);
    assert_eq!(completion_rate(1, 3), 33);
    assert_eq!(completion_rate(2, 3), 67);
    assert_eq!(completion_rate(0, 0), 0);
    assert_eq!(completion_rate(4, 4), 100);
}

#[test]
fn test_categories_first_seen_order() {
    let mut habits = sample_habits();
    habits.push(habit("9", 0, false)); // "Maintenance" again
    let store = HabitStore::new(habits);
    assert_eq!(
        store.categories(),
        vec![
            "all",
            "Watering",
            "Maintenance",
            "Fertilizing",
            "Pruning",
            "Composting",
            "Planting",
            "Harvesting",
            "Planning"
        ]
    );
}

#[test]
fn test_streak_tiers() {
    assert_eq!(StreakTier::from_streak(0), StreakTier::Starting);
    assert_eq!(StreakTier::from_streak(6), StreakTier::Starting);
    assert_eq!(StreakTier::from_streak(7), StreakTier::Week);
    assert_eq!(StreakTier::from_streak(13), StreakTier::Week);
    assert_eq!(StreakTier::from_streak(14), StreakTier::Fortnight);
    assert_eq!(StreakTier::from_streak(29), StreakTier::Fortnight);
    assert_eq!(StreakTier::from_streak(30), StreakTier::Month);
}

// =============================================================================
// Projection
// =============================================================================

#[test]
fn test_view_search_matches_title_description_category() {
    let store = sample_store();
    let mut filter = HabitFilter {
        search: "WATER".to_string(),
        ..Default::default()
    };
    let view = HabitView::compute(&store, &filter);
    // Title "Water Indoor Plants" and category "Watering"
    assert_eq!(view.indices, vec![0]);

    filter.search = "seedlings".to_string();
    assert_eq!(HabitView::compute(&store, &filter).indices, vec![5]);

    filter.search = "pruning".to_string();
    assert_eq!(HabitView::compute(&store, &filter).indices, vec![3]);
}

#[test]
fn test_view_category_filter_case_insensitive() {
    let store = sample_store();
    let filter = HabitFilter {
        search: String::new(),
        category: CategoryFilter::parse("composting"),
    };
    let view = HabitView::compute(&store, &filter);
    assert_eq!(view.indices, vec![4]);
}

#[test]
fn test_view_all_category_ignores_category_but_not_search() {
    let store = sample_store();
    let view = HabitView::compute(&store, &HabitFilter::default());
    assert_eq!(view.indices.len(), 8);

    let filter = HabitFilter {
        search: "garden".to_string(),
        category: CategoryFilter::All,
    };
    let view = HabitView::compute(&store, &filter);
    // "Check Outdoor Garden", "Fertilize Vegetables" (description), "Garden Planning"
    assert_eq!(view.indices, vec![1, 2, 7]);
}

#[test]
fn test_view_stats() {
    let store = sample_store();
    let view = HabitView::compute(&store, &HabitFilter::default());
    assert_eq!(view.completed_count, 3);
    assert_eq!(view.total, 8);
    assert_eq!(view.completion_rate, 38);
    assert_eq!(view.categories.len(), 9);
}

#[test]
fn test_empty_state_messages() {
    let store = sample_store();
    let filtered = HabitView::compute(
        &store,
        &HabitFilter {
            search: "orchid".to_string(),
            ..Default::default()
        },
    );
    let empty = filtered.empty_state().unwrap();
    assert_eq!(empty.title, "No habits found");
    assert_eq!(empty.hint, "Try adjusting your search or filter criteria");

    let none = HabitView::compute(&HabitStore::default(), &HabitFilter::default());
    assert_eq!(
        none.empty_state().unwrap().hint,
        "Start by adding your first gardening habit!"
    );

    let full = HabitView::compute(&store, &HabitFilter::default());
    assert!(full.empty_state().is_none());
}

// =============================================================================
// Storage shape
// =============================================================================

#[test]
fn test_stored_shape_is_camel_case() {
    let store = HabitStore::new(vec![habit("a", 1, false), {
        let mut h = habit("b", 2, true);
        h.last_completed = Some(today());
        h
    }]);
    let raw = store.to_stored().unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"lastCompleted\":\"2025-01-18\""));
    assert!(raw.contains("\"frequency\":\"daily\""));
    // Absent dates are omitted rather than written as null.
    assert_eq!(raw.matches("lastCompleted").count(), 1);

    let parsed = HabitStore::from_stored(&raw).unwrap();
    assert_eq!(parsed, store);
}

#[test]
fn test_reads_hand_written_json() {
    let raw = r#"[{"id":"1","title":"Water","description":"d","frequency":"weekly",
        "category":"Watering","streak":3,"completed":false,"icon":"💧"}]"#;
    let store = HabitStore::from_stored(raw).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.habits()[0].frequency, Frequency::Weekly);
    assert!(store.habits()[0].last_completed.is_none());
}

#[test]
fn test_malformed_values_rejected() {
    let cases = [
        "not json",
        r#"{"id":"1"}"#,
        r#"[{"id":"1","title":"t","description":"d","frequency":"hourly","category":"c","streak":1,"completed":false,"icon":"x"}]"#,
        r#"[{"id":"1","title":"t","description":"d","frequency":"daily","category":"c","streak":-2,"completed":false,"icon":"x"}]"#,
    ];
    for raw in cases {
        assert!(
            matches!(HabitStore::from_stored(raw), Err(StorageError::Decode(_))),
            "should reject: {raw}"
        );
    }
}
