//! Shopping cart page: line items, order summary and product suggestions.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::app_state::Page;
use garden::cart::{format_price, CartEvent, CartItem, CartState, CartSummary};
use garden::catalog::{Product, ProductFilter};
use garden::content::GardenContent;

use crate::theme::{card_frame, page_title, DANGER, DEEP_GREEN, LEAF_GREEN, MUTED_TEXT};
use crate::widgets::search_field;

const SUMMARY_WIDTH: f32 = 280.0;
const CHECKOUT_SIZE: egui::Vec2 = egui::Vec2 { x: 256.0, y: 40.0 };

/// What a line item row asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowAction {
    None,
    Decrease,
    Increase,
    Remove,
}

pub fn cart_page_ui(
    mut contexts: EguiContexts,
    cart: Res<CartState>,
    summary: Res<CartSummary>,
    content: Res<GardenContent>,
    mut product_filter: ResMut<ProductFilter>,
    mut next_page: ResMut<NextState<Page>>,
    mut cart_events: EventWriter<CartEvent>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            page_title(ui, "Shopping Cart", "Review your garden essentials before checkout.");

            if cart.is_empty() {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("🛒").size(48.0));
                    ui.label(egui::RichText::new("Your cart is empty").size(20.0).strong());
                    ui.label(
                        egui::RichText::new("Add some garden essentials to get started!")
                            .color(MUTED_TEXT),
                    );
                    ui.add_space(12.0);
                    if ui.button("Browse the gallery").clicked() {
                        next_page.set(Page::Gallery);
                    }
                });
                ui.add_space(24.0);
            } else {
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width((ui.available_width() - SUMMARY_WIDTH - 16.0).max(320.0));
                        for item in cart.items() {
                            let desired = i64::from(item.quantity);
                            match item_row(ui, item) {
                                RowAction::Decrease => {
                                    cart_events.send(CartEvent::ChangeQuantity {
                                        id: item.id.clone(),
                                        desired: desired - 1,
                                    });
                                }
                                RowAction::Increase => {
                                    cart_events.send(CartEvent::ChangeQuantity {
                                        id: item.id.clone(),
                                        desired: desired + 1,
                                    });
                                }
                                RowAction::Remove => {
                                    cart_events.send(CartEvent::Remove { id: item.id.clone() });
                                }
                                RowAction::None => {}
                            }
                            ui.add_space(6.0);
                        }
                        if ui
                            .button(egui::RichText::new("Clear Cart").color(DANGER))
                            .clicked()
                        {
                            cart_events.send(CartEvent::Clear);
                        }
                    });

                    order_summary(ui, &summary);
                });
            }

            ui.add_space(24.0);
            ui.separator();
            ui.label(egui::RichText::new("Add More Items").size(20.0).strong());
            ui.horizontal(|ui| {
                let search = search_field(ui, &product_filter.search, "Search products...");
                if search != product_filter.search {
                    product_filter.search = search;
                }
            });
            ui.add_space(8.0);

            let suggestions: Vec<&Product> = summary
                .suggestions
                .iter()
                .filter_map(|&i| content.products.get(i))
                .collect();
            if suggestions.is_empty() {
                ui.label(egui::RichText::new("No more products to suggest.").color(MUTED_TEXT));
            }
            ui.horizontal_wrapped(|ui| {
                for product in suggestions {
                    if suggestion_card(ui, product) {
                        cart_events.send(CartEvent::Add(product.clone()));
                    }
                }
            });
        });
    });
}

fn item_row(ui: &mut egui::Ui, item: &CartItem) -> RowAction {
    let mut action = RowAction::None;
    card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&item.name).strong());
                ui.label(
                    egui::RichText::new(format!("{} · {} each", item.category.label(), format_price(item.price)))
                        .small()
                        .color(MUTED_TEXT),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                    action = RowAction::Remove;
                }
                ui.label(egui::RichText::new(format_price(item.line_total())).strong());
                ui.add_space(12.0);
                if ui.small_button("+").clicked() {
                    action = RowAction::Increase;
                }
                ui.label(item.quantity.to_string());
                if ui.small_button("-").clicked() {
                    action = RowAction::Decrease;
                }
            });
        });
    });
    action
}

fn order_summary(ui: &mut egui::Ui, summary: &CartSummary) {
    card_frame(false).show(ui, |ui| {
        ui.set_width(SUMMARY_WIDTH);
        ui.label(egui::RichText::new("Order Summary").size(18.0).strong());
        ui.add_space(8.0);
        egui::Grid::new("order_summary")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(format!("Items ({})", summary.item_count));
                ui.label(format_price(summary.subtotal));
                ui.end_row();

                ui.label("Shipping");
                ui.label(egui::RichText::new("Free").color(DEEP_GREEN));
                ui.end_row();

                ui.label("Tax");
                ui.label(format_price(summary.tax));
                ui.end_row();

                ui.label(egui::RichText::new("Total").strong());
                ui.label(egui::RichText::new(format_price(summary.grand_total)).strong());
                ui.end_row();
            });
        ui.add_space(12.0);
        let checkout = egui::Button::new(
            egui::RichText::new("Proceed to Checkout").color(egui::Color32::WHITE),
        )
        .fill(LEAF_GREEN);
        ui.add_enabled(summary.checkout_enabled, |ui: &mut egui::Ui| {
            ui.add_sized(CHECKOUT_SIZE, checkout)
        })
        .on_disabled_hover_text("Your cart is empty");
    });
}

/// Returns `true` when the add button was clicked.
fn suggestion_card(ui: &mut egui::Ui, product: &Product) -> bool {
    card_frame(false)
        .show(ui, |ui| {
            ui.set_width(200.0);
            ui.label(egui::RichText::new(&product.name).strong());
            ui.label(
                egui::RichText::new(product.category.label())
                    .small()
                    .color(MUTED_TEXT),
            );
            ui.horizontal(|ui| {
                ui.label(format_price(product.price));
                ui.button("+ Add").clicked()
            })
            .inner
        })
        .inner
}
