//! Habit tracking.
//!
//! `HabitStore` is restored from storage at startup (or seeded), mutated only
//! by `ToggleHabitEvent`, and written back by the persistence registry after
//! every successful toggle. `HabitView` is the memoized list the page renders.

use bevy::prelude::*;

use crate::{GardenSet, PersistedAppExt};

pub mod projection;
pub mod save;
pub mod systems;
pub mod types;

#[cfg(test)]
mod tests;

pub use projection::{HabitFilter, HabitView};
pub use systems::ToggleHabitEvent;
pub use types::{completion_rate, Frequency, Habit, HabitError, HabitStore, StreakTier};

pub struct HabitsPlugin;

impl Plugin for HabitsPlugin {
    fn build(&self, app: &mut App) {
        app.register_persisted::<HabitStore>()
            .init_resource::<HabitFilter>()
            .init_resource::<HabitView>()
            .add_event::<ToggleHabitEvent>()
            .add_systems(
                Update,
                (
                    systems::handle_toggle_habit.in_set(GardenSet::Mutate),
                    systems::refresh_habit_view
                        .run_if(resource_changed::<HabitStore>.or(resource_changed::<HabitFilter>))
                        .in_set(GardenSet::Project),
                ),
            );
    }
}
