//! Landing page: hero banner, feature cards and the FAQ accordion.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::app_state::Page;
use garden::content::GardenContent;
use garden::session::Session;

use crate::theme::{card_frame, DEEP_GREEN, LEAF_GREEN, MINT, MUTED_TEXT};

const CTA_SIZE: egui::Vec2 = egui::Vec2 { x: 200.0, y: 40.0 };
const FEATURE_CARD_WIDTH: f32 = 220.0;

pub fn home_page_ui(
    mut contexts: EguiContexts,
    content: Res<GardenContent>,
    session: Res<Session>,
    mut next_page: ResMut<NextState<Page>>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            hero(ui, &session, &mut next_page);
            ui.add_space(24.0);

            ui.label(egui::RichText::new("Why Garden Habits?").size(22.0).strong());
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for feature in &content.features {
                    card_frame(false).show(ui, |ui| {
                        ui.set_width(FEATURE_CARD_WIDTH);
                        ui.label(egui::RichText::new(&feature.icon).size(28.0));
                        ui.label(egui::RichText::new(&feature.title).strong());
                        ui.label(egui::RichText::new(&feature.description).color(MUTED_TEXT));
                    });
                }
            });

            ui.add_space(24.0);
            ui.label(
                egui::RichText::new("Frequently Asked Questions")
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(8.0);
            for entry in &content.faq {
                egui::CollapsingHeader::new(egui::RichText::new(&entry.question).strong())
                    .id_salt(&entry.id)
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label(&entry.answer);
                    });
            }
            ui.add_space(24.0);
        });
    });
}

fn hero(ui: &mut egui::Ui, session: &Session, next_page: &mut NextState<Page>) {
    egui::Frame::new()
        .fill(MINT)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Grow your garden, one habit at a time")
                        .size(32.0)
                        .strong()
                        .color(DEEP_GREEN),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(
                        "Track daily garden care, browse inspiring gardens and pick up the tools you need.",
                    )
                    .size(16.0)
                    .color(MUTED_TEXT),
                );
                ui.add_space(16.0);

                let primary = if session.is_logged_in() {
                    "View My Habits"
                } else {
                    "Get Started"
                };
                let target = if session.is_logged_in() {
                    Page::Habits
                } else {
                    Page::Login
                };
                if ui
                    .add_sized(
                        CTA_SIZE,
                        egui::Button::new(
                            egui::RichText::new(primary)
                                .size(16.0)
                                .color(egui::Color32::WHITE),
                        )
                        .fill(LEAF_GREEN),
                    )
                    .clicked()
                {
                    next_page.set(target);
                }
                if ui
                    .add_sized(CTA_SIZE, egui::Button::new("Browse Gallery"))
                    .clicked()
                {
                    next_page.set(Page::Gallery);
                }
            });
        });
}
