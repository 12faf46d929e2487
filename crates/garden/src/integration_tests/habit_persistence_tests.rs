use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::catalog::CategoryFilter;
use crate::config::HABITS_KEY;
use crate::habits::{HabitFilter, HabitStore, HabitView, ToggleHabitEvent};
use crate::notifications::NotificationLog;
use crate::sample_data::sample_habits;
use crate::storage::{KeyValueStore, LocalStorage, StorageError};
use crate::test_harness::TestGarden;
use crate::{GardenPlugin, Persisted};

fn stored_habits(garden: &TestGarden) -> HabitStore {
    let raw = garden.stored(HABITS_KEY).expect("habits should be stored");
    HabitStore::from_stored(&raw).expect("stored habits should parse")
}

#[test]
fn first_load_seeds_and_persists() {
    let garden = TestGarden::new();
    assert_eq!(garden.resource::<HabitStore>().habits(), sample_habits().as_slice());
    assert_eq!(stored_habits(&garden).habits(), sample_habits().as_slice());
}

#[test]
fn toggle_updates_streak_and_persists() {
    let mut garden = TestGarden::new();
    // Habit "1" starts incomplete with a 15 day streak.
    garden.dispatch(ToggleHabitEvent { id: "1".to_string() });

    let habit = garden.resource::<HabitStore>().get("1").cloned().unwrap();
    assert!(habit.completed);
    assert_eq!(habit.streak, 16);
    assert_eq!(habit.last_completed, Some(TestGarden::default_today()));

    let stored = stored_habits(&garden);
    assert_eq!(stored.get("1"), Some(&habit));
}

#[test]
fn toggle_off_keeps_streak() {
    let mut garden = TestGarden::new();
    garden.dispatch(ToggleHabitEvent { id: "1".to_string() });
    garden.dispatch(ToggleHabitEvent { id: "1".to_string() });

    let habit = garden.resource::<HabitStore>().get("1").cloned().unwrap();
    assert!(!habit.completed);
    assert_eq!(habit.streak, 16);
    assert!(!stored_habits(&garden).get("1").unwrap().completed);
}

#[test]
fn completing_a_habit_notifies() {
    let mut garden = TestGarden::new();
    garden.dispatch(ToggleHabitEvent { id: "3".to_string() });
    let log = garden.resource::<NotificationLog>();
    assert!(log.history.iter().any(|n| n.text.contains("Fertilize Vegetables")));
}

#[test]
fn habits_survive_restart() {
    let mut garden = TestGarden::new();
    garden.dispatch(ToggleHabitEvent { id: "6".to_string() });

    let restarted = garden.restart();
    let habit = restarted.resource::<HabitStore>().get("6").cloned().unwrap();
    assert!(habit.completed);
    assert_eq!(habit.streak, 4);
}

#[test]
fn malformed_storage_falls_back_to_seed_and_overwrites() {
    let garden = TestGarden::builder()
        .with_entry(HABITS_KEY, "{not valid json")
        .build();

    assert_eq!(garden.resource::<HabitStore>().habits(), sample_habits().as_slice());
    assert_eq!(stored_habits(&garden).habits(), sample_habits().as_slice());
}

#[test]
fn wrong_shape_falls_back_to_seed() {
    let garden = TestGarden::builder()
        .with_entry(HABITS_KEY, r#"[{"id":"1","streak":"many"}]"#)
        .build();
    assert_eq!(garden.resource::<HabitStore>().len(), 8);
}

#[test]
fn stored_habits_win_over_seed() {
    let mut habits = sample_habits();
    habits.truncate(2);
    habits[0].streak = 99;
    let raw = HabitStore::new(habits).to_stored().unwrap();

    let garden = TestGarden::builder().with_entry(HABITS_KEY, &raw).build();
    let store = garden.resource::<HabitStore>();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("1").unwrap().streak, 99);
}

#[test]
fn unknown_habit_id_changes_nothing() {
    let mut garden = TestGarden::new();
    let before = garden.resource::<HabitStore>().clone();
    garden.dispatch(ToggleHabitEvent {
        id: "nope".to_string(),
    });
    assert_eq!(garden.resource::<HabitStore>(), &before);
}

#[test]
fn view_recomputes_after_toggle_and_filter_change() {
    let mut garden = TestGarden::new();
    assert_eq!(garden.resource::<HabitView>().completed_count, 3);

    garden.dispatch(ToggleHabitEvent { id: "1".to_string() });
    let view = garden.resource::<HabitView>();
    assert_eq!(view.completed_count, 4);
    assert_eq!(view.completion_rate, 50);

    garden.resource_mut::<HabitFilter>().category = CategoryFilter::parse("Mulching");
    garden.update();
    let view = garden.resource::<HabitView>();
    assert!(view.indices.is_empty());
    assert_eq!(
        view.empty_state().unwrap().hint,
        "Try adjusting your search or filter criteria"
    );
}

/// A store whose reads always fail. Records the keys written to it.
struct UnreadableStore {
    writes: Arc<Mutex<Vec<String>>>,
}

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("read blocked".to_string()))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(key.to_string());
        }
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "unreadable"
    }
}

#[test]
fn read_failure_seeds_without_overwriting() {
    let writes = Arc::new(Mutex::new(Vec::new()));

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(LocalStorage::new(UnreadableStore {
        writes: Arc::clone(&writes),
    }));
    app.add_plugins(GardenPlugin);
    app.update();
    app.update();

    assert_eq!(app.world().resource::<HabitStore>().len(), 8);
    assert!(writes.lock().unwrap().is_empty(), "seed must not overwrite");

    // A real change is still saved.
    app.world_mut().send_event(ToggleHabitEvent { id: "1".to_string() });
    app.update();
    assert!(app.world().resource::<HabitStore>().get("1").unwrap().completed);
    assert_eq!(*writes.lock().unwrap(), vec![HABITS_KEY.to_string()]);
}
