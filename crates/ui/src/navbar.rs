use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::app_state::Page;
use garden::cart::CartSummary;
use garden::session::{LogoutEvent, Session};

use crate::notification_ticker::NotificationJournalVisible;
use crate::theme::{DEEP_GREEN, LEAF_GREEN};

/// Cart button text; the count is omitted for an empty cart.
pub fn cart_button_label(item_count: u32) -> String {
    if item_count == 0 {
        "🛒 Cart".to_string()
    } else {
        format!("🛒 Cart ({item_count})")
    }
}

pub fn navbar_ui(
    mut contexts: EguiContexts,
    page: Res<State<Page>>,
    mut next_page: ResMut<NextState<Page>>,
    session: Res<Session>,
    summary: Res<CartSummary>,
    mut journal: ResMut<NotificationJournalVisible>,
    mut logout: EventWriter<LogoutEvent>,
) {
    let current = *page.get();

    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Label::new(
                            egui::RichText::new("🌱 Garden Habits")
                                .size(20.0)
                                .strong()
                                .color(DEEP_GREEN),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    next_page.set(Page::Home);
                }
                ui.add_space(24.0);

                for &link in Page::NAV_LINKS {
                    if ui.selectable_label(current == link, link.label()).clicked() {
                        next_page.set(link);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if session.is_logged_in() {
                        if ui.button("Logout").clicked() {
                            logout.send(LogoutEvent);
                        }
                        ui.label(format!("Hi, {}", session.display_name()));
                    } else if ui
                        .add(egui::Button::new(egui::RichText::new("Login").color(egui::Color32::WHITE)).fill(LEAF_GREEN))
                        .clicked()
                    {
                        next_page.set(Page::Login);
                    }

                    let cart = ui.selectable_label(
                        current == Page::Cart,
                        cart_button_label(summary.item_count),
                    );
                    if cart.clicked() {
                        next_page.set(Page::Cart);
                    }

                    if ui
                        .small_button("🔔")
                        .on_hover_text("Notification history")
                        .clicked()
                    {
                        journal.0 = !journal.0;
                    }
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_label_hides_zero_count() {
        assert_eq!(cart_button_label(0), "🛒 Cart");
    }

    #[test]
    fn test_cart_label_shows_item_count() {
        assert_eq!(cart_button_label(3), "🛒 Cart (3)");
    }
}
