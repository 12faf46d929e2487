use bevy::prelude::*;

use crate::clock::GardenClock;
use crate::notifications::NotificationEvent;

use super::projection::{HabitFilter, HabitView};
use super::types::HabitStore;

/// Toggle the completion of one habit.
#[derive(Event, Debug, Clone)]
pub struct ToggleHabitEvent {
    pub id: String,
}

/// Applies toggles. The store is only flagged as changed when a toggle
/// succeeds, so unknown ids never trigger a write.
pub(crate) fn handle_toggle_habit(
    mut events: EventReader<ToggleHabitEvent>,
    mut store: ResMut<HabitStore>,
    clock: Res<GardenClock>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let today = clock.today();
    for event in events.read() {
        let completed = match store.bypass_change_detection().toggle(&event.id, today) {
            Ok(habit) => habit.completed.then(|| (habit.title.clone(), habit.streak)),
            Err(e) => {
                debug!("Habits: toggle ignored: {e}");
                continue;
            }
        };
        store.set_changed();
        if let Some((title, streak)) = completed {
            notifications.send(NotificationEvent::positive(format!(
                "{title} done! {streak} day streak"
            )));
        }
    }
}

pub(crate) fn refresh_habit_view(
    store: Res<HabitStore>,
    filter: Res<HabitFilter>,
    mut view: ResMut<HabitView>,
) {
    *view = HabitView::compute(&store, &filter);
}
