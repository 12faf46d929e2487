//! Small egui building blocks shared by the pages.

use bevy_egui::egui;

use garden::catalog::{category_label, CategoryFilter, EmptyState};

use crate::theme::MUTED_TEXT;

pub const SEARCH_WIDTH: f32 = 280.0;

/// Single-line search box. Edits a copy so callers can apply the result with
/// `set_if_neq` and only trigger change detection on a real edit.
pub fn search_field(ui: &mut egui::Ui, current: &str, hint: &str) -> String {
    let mut text = current.to_string();
    ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text(hint)
            .desired_width(SEARCH_WIDTH),
    );
    text
}

/// Category dropdown over `categories` (which starts with the "all" entry).
pub fn category_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: &CategoryFilter,
    categories: &[String],
) -> CategoryFilter {
    let mut selected = current.clone();
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(category_label(current.as_str()))
        .show_ui(ui, |ui| {
            for category in categories {
                let option = CategoryFilter::parse(category);
                let is_current = option == *current;
                if ui
                    .selectable_label(is_current, category_label(category))
                    .clicked()
                {
                    selected = option;
                }
            }
        });
    selected
}

pub fn empty_state(ui: &mut egui::Ui, state: EmptyState) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(state.title).size(20.0).strong());
        ui.label(egui::RichText::new(state.hint).color(MUTED_TEXT));
    });
}

/// Tag preview line: `#a #b #c +2`.
pub fn tag_line(tags: &[String], hidden: usize) -> String {
    let mut line = tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");
    if hidden > 0 {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("+{hidden}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tag_line_without_overflow() {
        assert_eq!(tag_line(&tags(&["herbs", "raised-beds"]), 0), "#herbs #raised-beds");
    }

    #[test]
    fn test_tag_line_with_overflow() {
        assert_eq!(
            tag_line(&tags(&["zen", "rocks", "minimal"]), 2),
            "#zen #rocks #minimal +2"
        );
    }

    #[test]
    fn test_tag_line_empty() {
        assert_eq!(tag_line(&[], 0), "");
        assert_eq!(tag_line(&[], 4), "+4");
    }
}
