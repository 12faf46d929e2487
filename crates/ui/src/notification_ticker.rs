//! Toast stack for active notifications and a history window.
//!
//! Active notifications are shown top-right below the navbar, newest first,
//! each with a close button. Expiry is handled by `NotificationLog::sweep`;
//! this module only renders and sends `DismissNotificationEvent`.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::notifications::{DismissNotificationEvent, NotificationLog, NotificationPriority};

use crate::theme::{DEEP_GREEN, MUTED_TEXT};

// =============================================================================
// Constants
// =============================================================================

const TOAST_WIDTH: f32 = 300.0;

/// Offset from the top-right corner (below the navbar).
const TOAST_OFFSET: egui::Vec2 = egui::Vec2 { x: -12.0, y: 56.0 };

// =============================================================================
// Resources
// =============================================================================

/// Tracks visibility of the notification history window.
#[derive(Resource, Default)]
pub struct NotificationJournalVisible(pub bool);

// =============================================================================
// Color mapping
// =============================================================================

fn priority_color(priority: NotificationPriority) -> egui::Color32 {
    match priority {
        NotificationPriority::Warning => egui::Color32::from_rgb(217, 119, 6),
        NotificationPriority::Info => egui::Color32::from_rgb(55, 65, 81),
        NotificationPriority::Positive => DEEP_GREEN,
    }
}

fn priority_icon(priority: NotificationPriority) -> &'static str {
    match priority {
        NotificationPriority::Warning => "⚠",
        NotificationPriority::Info => "ℹ",
        NotificationPriority::Positive => "🌱",
    }
}

// =============================================================================
// Toasts
// =============================================================================

pub fn notification_ticker_ui(
    mut contexts: EguiContexts,
    log: Res<NotificationLog>,
    mut dismiss: EventWriter<DismissNotificationEvent>,
) {
    if log.active.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notification_toasts"))
        .anchor(egui::Align2::RIGHT_TOP, TOAST_OFFSET)
        .order(egui::Order::Foreground)
        .show(contexts.ctx_mut(), |ui| {
            ui.set_width(TOAST_WIDTH);
            for notif in log.active.iter().rev() {
                let color = priority_color(notif.priority);
                egui::Frame::new()
                    .fill(egui::Color32::WHITE)
                    .stroke(egui::Stroke::new(1.5, color))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(priority_icon(notif.priority)).color(color),
                            );
                            ui.label(egui::RichText::new(&notif.text).color(color));
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("x").clicked() {
                                    dismiss.send(DismissNotificationEvent { id: notif.id });
                                }
                            });
                        });
                    });
                ui.add_space(4.0);
            }
        });
}

// =============================================================================
// History window
// =============================================================================

pub fn notification_journal_ui(
    mut contexts: EguiContexts,
    log: Res<NotificationLog>,
    mut visible: ResMut<NotificationJournalVisible>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("Notifications")
        .open(&mut open)
        .default_width(360.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-8.0, -8.0))
        .resizable(true)
        .collapsible(true)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(format!("{} entries", log.history.len()));
            ui.separator();

            if log.history.is_empty() {
                ui.label("Nothing yet.");
                return;
            }

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| {
                    for entry in log.history.iter().rev() {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(entry.priority.label())
                                    .small()
                                    .color(MUTED_TEXT),
                            );
                            ui.label(
                                egui::RichText::new(&entry.text).color(priority_color(entry.priority)),
                            );
                        });
                    }
                });
        });

    if !open {
        visible.0 = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
