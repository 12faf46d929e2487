//! Habit tracker page: stats, search/category filter and the habit cards.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::habits::{Habit, HabitFilter, HabitStore, HabitView, ToggleHabitEvent};

use crate::theme::{card_frame, frequency_color, page_title, streak_color, LEAF_GREEN, MUTED_TEXT};
use crate::widgets::{category_combo, empty_state, search_field};

const HABIT_CARD_WIDTH: f32 = 300.0;
const STAT_CARD_WIDTH: f32 = 160.0;

/// "1 day streak" / "12 day streak".
pub fn streak_label(streak: u32) -> String {
    format!("🔥 {streak} day streak")
}

pub fn last_completed_label(habit: &Habit) -> Option<String> {
    habit
        .last_completed
        .map(|date| format!("Last: {}", date.format("%b %-d, %Y")))
}

pub fn habits_page_ui(
    mut contexts: EguiContexts,
    store: Res<HabitStore>,
    view: Res<HabitView>,
    mut filter: ResMut<HabitFilter>,
    mut toggles: EventWriter<ToggleHabitEvent>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            page_title(
                ui,
                "My Garden Habits",
                "Build a healthy garden routine and keep your streaks growing.",
            );

            ui.horizontal_wrapped(|ui| {
                stat_card(
                    ui,
                    "Completed",
                    &format!("{}/{}", view.completed_count, view.total),
                );
                stat_card(ui, "Completion Rate", &format!("{}%", view.completion_rate));
                stat_card(ui, "Total Habits", &view.total.to_string());
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let search = search_field(ui, &filter.search, "Search habits...");
                let category = category_combo(ui, "habit_category", &filter.category, &view.categories);
                filter.set_if_neq(HabitFilter { search, category });
            });
            ui.add_space(12.0);

            if let Some(state) = view.empty_state() {
                empty_state(ui, state);
                return;
            }

            ui.horizontal_wrapped(|ui| {
                for &index in &view.indices {
                    let Some(habit) = store.habits().get(index) else {
                        continue;
                    };
                    if habit_card(ui, habit) {
                        toggles.send(ToggleHabitEvent {
                            id: habit.id.clone(),
                        });
                    }
                }
            });
        });
    });
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: &str) {
    card_frame(false).show(ui, |ui| {
        ui.set_width(STAT_CARD_WIDTH);
        ui.label(egui::RichText::new(value).size(24.0).strong());
        ui.label(egui::RichText::new(label).color(MUTED_TEXT));
    });
}

/// Draws one habit card. Returns `true` when its toggle button was clicked.
fn habit_card(ui: &mut egui::Ui, habit: &Habit) -> bool {
    let mut clicked = false;
    card_frame(habit.completed).show(ui, |ui| {
        ui.set_width(HABIT_CARD_WIDTH);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&habit.icon).size(28.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&habit.title).size(16.0).strong());
                ui.label(egui::RichText::new(&habit.category).small().color(MUTED_TEXT));
            });
        });
        ui.label(&habit.description);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(habit.frequency.label())
                    .small()
                    .color(frequency_color(habit.frequency)),
            );
            ui.label(
                egui::RichText::new(streak_label(habit.streak))
                    .strong()
                    .color(streak_color(habit.streak_tier())),
            );
        });
        if let Some(last) = last_completed_label(habit) {
            ui.label(egui::RichText::new(last).small().color(MUTED_TEXT));
        }

        let button = if habit.completed {
            egui::Button::new("✔ Completed")
        } else {
            egui::Button::new(egui::RichText::new("Mark Complete").color(egui::Color32::WHITE))
                .fill(LEAF_GREEN)
        };
        clicked = ui
            .add_sized(egui::vec2(ui.available_width(), 30.0), button)
            .clicked();
    });
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use garden::habits::Frequency;

    fn habit(last_completed: Option<NaiveDate>) -> Habit {
        Habit {
            id: "1".to_string(),
            title: "Water plants".to_string(),
            description: "Morning watering".to_string(),
            frequency: Frequency::Daily,
            category: "watering".to_string(),
            streak: 0,
            completed: false,
            last_completed,
            icon: "💧".to_string(),
        }
    }

    #[test]
    fn test_streak_label() {
        assert_eq!(streak_label(12), "🔥 12 day streak");
    }

    #[test]
    fn test_last_completed_label_formats_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5);
        assert_eq!(
            last_completed_label(&habit(date)).as_deref(),
            Some("Last: Jan 5, 2025")
        );
    }

    #[test]
    fn test_last_completed_label_absent() {
        assert_eq!(last_completed_label(&habit(None)), None);
    }
}
