use bevy_egui::{egui, EguiContexts};
use garden::habits::{Frequency, StreakTier};

pub const LEAF_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const DEEP_GREEN: egui::Color32 = egui::Color32::from_rgb(21, 128, 61);
pub const MINT: egui::Color32 = egui::Color32::from_rgb(220, 252, 231);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

pub fn apply_garden_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Soft off-white pages with green accents
    let panel = egui::Color32::from_rgb(249, 250, 251);
    let inactive = egui::Color32::from_rgb(243, 244, 246);
    let hover = egui::Color32::from_rgb(209, 250, 229);
    let active = LEAF_GREEN;

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = egui::Color32::WHITE;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::WHITE;
    style.visuals.faint_bg_color = egui::Color32::from_rgb(240, 253, 244);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, DEEP_GREEN);
    style.visuals.hyperlink_color = DEEP_GREEN;

    // egui 0.31+ uses CornerRadius with u8 values
    let window_rounding = egui::CornerRadius::same(10);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}

/// White rounded card used for habits, cart rows and gallery entries.
pub fn card_frame(highlight: bool) -> egui::Frame {
    let stroke = if highlight {
        egui::Stroke::new(2.0, LEAF_GREEN)
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_rgb(229, 231, 235))
    };
    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

pub fn page_title(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(title).size(28.0).strong());
    ui.label(egui::RichText::new(subtitle).color(MUTED_TEXT));
    ui.add_space(12.0);
}

pub fn streak_color(tier: StreakTier) -> egui::Color32 {
    match tier {
        StreakTier::Month => egui::Color32::from_rgb(147, 51, 234),
        StreakTier::Fortnight => DEEP_GREEN,
        StreakTier::Week => egui::Color32::from_rgb(37, 99, 235),
        StreakTier::Starting => MUTED_TEXT,
    }
}

pub fn frequency_color(frequency: Frequency) -> egui::Color32 {
    match frequency {
        Frequency::Daily => DEEP_GREEN,
        Frequency::Weekly => egui::Color32::from_rgb(30, 64, 175),
        Frequency::Monthly => egui::Color32::from_rgb(107, 33, 168),
    }
}
