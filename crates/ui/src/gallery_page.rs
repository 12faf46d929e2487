//! Garden gallery: filterable image cards in a grid or list, plus a detail
//! window for the selected image.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::catalog::{category_label, GalleryFilter, GalleryView, GalleryViewMode, GalleryViewState, GardenImage};
use garden::config::TAG_PREVIEW_LIMIT;
use garden::content::GardenContent;

use crate::theme::{card_frame, page_title, DEEP_GREEN, MINT, MUTED_TEXT};
use crate::widgets::{category_combo, empty_state, search_field, tag_line};

const GRID_CARD_WIDTH: f32 = 260.0;
const THUMB_HEIGHT: f32 = 120.0;

pub fn gallery_page_ui(
    mut contexts: EguiContexts,
    content: Res<GardenContent>,
    view: Res<GalleryView>,
    mut filter: ResMut<GalleryFilter>,
    mut state: ResMut<GalleryViewState>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            page_title(
                ui,
                "Garden Gallery",
                "Get inspired by beautiful gardens from around the world.",
            );

            ui.horizontal(|ui| {
                let search = search_field(ui, &filter.search, "Search gardens, plants, styles...");
                let category = category_combo(ui, "gallery_category", &filter.category, &view.categories);
                filter.set_if_neq(GalleryFilter { search, category });

                ui.separator();
                let mut mode = state.mode;
                ui.selectable_value(&mut mode, GalleryViewMode::Grid, "▦ Grid");
                ui.selectable_value(&mut mode, GalleryViewMode::List, "☰ List");
                if mode != state.mode {
                    state.mode = mode;
                }
            });
            ui.add_space(4.0);
            ui.label(egui::RichText::new(view.summary_line()).color(MUTED_TEXT));
            ui.add_space(8.0);

            if let Some(empty) = view.empty_state() {
                empty_state(ui, empty);
                return;
            }

            let mut clicked: Option<&str> = None;
            let images = view
                .indices
                .iter()
                .filter_map(|&i| content.images.get(i));
            match state.mode {
                GalleryViewMode::Grid => {
                    ui.horizontal_wrapped(|ui| {
                        for image in images {
                            if grid_card(ui, image) {
                                clicked = Some(image.id.as_str());
                            }
                        }
                    });
                }
                GalleryViewMode::List => {
                    for image in images {
                        if list_row(ui, image) {
                            clicked = Some(image.id.as_str());
                        }
                    }
                }
            }
            if let Some(id) = clicked {
                state.select(id);
            }
        });
    });
}

/// Detail window for the selected image. Closing it clears the selection.
pub fn image_detail_ui(
    mut contexts: EguiContexts,
    content: Res<GardenContent>,
    mut state: ResMut<GalleryViewState>,
) {
    let Some(image) = state.selected.as_deref().and_then(|id| content.image(id)) else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(&image.title)
        .id(egui::Id::new("gallery_image_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(contexts.ctx_mut(), |ui| {
            let width = ui.available_width();
            thumbnail(ui, image, width, 200.0);
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(category_label(&image.category))
                    .small()
                    .color(DEEP_GREEN),
            );
            ui.label(&image.description);
            ui.add_space(6.0);
            ui.label(egui::RichText::new(tag_line(&image.tags, 0)).color(MUTED_TEXT));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.hyperlink_to("Open photo", &image.url);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    if !open || close_clicked {
        state.close_detail();
    }
}

/// Placeholder tile standing in for the photo.
fn thumbnail(ui: &mut egui::Ui, image: &GardenImage, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(6), MINT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "🌿",
        egui::FontId::proportional(height * 0.4),
        DEEP_GREEN,
    );
    ui.interact(rect, ui.id().with(("thumb", &image.id)), egui::Sense::hover())
        .on_hover_text(&image.title);
}

fn grid_card(ui: &mut egui::Ui, image: &GardenImage) -> bool {
    let (preview, hidden) = image.tag_preview(TAG_PREVIEW_LIMIT);
    card_frame(false)
        .show(ui, |ui| {
            ui.set_width(GRID_CARD_WIDTH);
            thumbnail(ui, image, GRID_CARD_WIDTH, THUMB_HEIGHT);
            ui.label(egui::RichText::new(&image.title).strong());
            ui.label(
                egui::RichText::new(category_label(&image.category))
                    .small()
                    .color(DEEP_GREEN),
            );
            ui.label(egui::RichText::new(tag_line(preview, hidden)).small().color(MUTED_TEXT));
            ui.button("View details").clicked()
        })
        .inner
}

fn list_row(ui: &mut egui::Ui, image: &GardenImage) -> bool {
    let (preview, hidden) = image.tag_preview(TAG_PREVIEW_LIMIT);
    card_frame(false)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                thumbnail(ui, image, 120.0, 80.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&image.title).strong());
                    ui.label(
                        egui::RichText::new(category_label(&image.category))
                            .small()
                            .color(DEEP_GREEN),
                    );
                    ui.label(&image.description);
                    ui.label(egui::RichText::new(tag_line(preview, hidden)).small().color(MUTED_TEXT));
                    ui.button("View details").clicked()
                })
                .inner
            })
            .inner
        })
        .inner
}
