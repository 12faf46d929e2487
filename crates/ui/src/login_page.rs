use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use garden::app_state::Page;
use garden::session::{LoginEvent, Session};

use crate::theme::{card_frame, DEEP_GREEN, LEAF_GREEN, MUTED_TEXT};

const FORM_WIDTH: f32 = 320.0;
const BUTTON_SIZE: egui::Vec2 = egui::Vec2 { x: 320.0, y: 40.0 };

/// Text typed into the login form. The password is never checked or stored.
#[derive(Resource, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn can_submit(&self) -> bool {
        !self.username.trim().is_empty()
    }
}

pub fn login_page_ui(
    mut contexts: EguiContexts,
    session: Res<Session>,
    mut form: ResMut<LoginForm>,
    mut next_page: ResMut<NextState<Page>>,
    mut login: EventWriter<LoginEvent>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            card_frame(false).show(ui, |ui| {
                ui.set_width(FORM_WIDTH);
                ui.label(
                    egui::RichText::new("🌱 Welcome Back")
                        .size(26.0)
                        .strong()
                        .color(DEEP_GREEN),
                );
                ui.label(egui::RichText::new("Sign in to track your garden habits").color(MUTED_TEXT));
                ui.add_space(16.0);

                if session.is_logged_in() {
                    ui.label(format!("You are signed in as {}.", session.display_name()));
                    ui.add_space(8.0);
                    if ui.add_sized(BUTTON_SIZE, egui::Button::new("Go to My Habits")).clicked() {
                        next_page.set(Page::Habits);
                    }
                    return;
                }

                ui.label("Username");
                let username = ui.add(
                    egui::TextEdit::singleline(&mut form.username)
                        .hint_text("Enter your username")
                        .desired_width(FORM_WIDTH),
                );
                ui.add_space(6.0);
                ui.label("Password");
                let password = ui.add(
                    egui::TextEdit::singleline(&mut form.password)
                        .password(true)
                        .hint_text("Enter your password")
                        .desired_width(FORM_WIDTH),
                );
                ui.add_space(12.0);

                let submitted_with_enter = (username.lost_focus() || password.lost_focus())
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let sign_in = egui::Button::new(
                    egui::RichText::new("Sign In").size(16.0).color(egui::Color32::WHITE),
                )
                .fill(LEAF_GREEN);
                let clicked = ui
                    .add_enabled(form.can_submit(), |ui: &mut egui::Ui| ui.add_sized(BUTTON_SIZE, sign_in))
                    .on_disabled_hover_text("Please enter a username")
                    .clicked();

                if (clicked || submitted_with_enter) && form.can_submit() {
                    login.send(LoginEvent {
                        username: form.username.clone(),
                    });
                    *form = LoginForm::default();
                }
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new("Any username works, this demo has no accounts.")
                        .small()
                        .color(MUTED_TEXT),
                );
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_cannot_submit() {
        let form = LoginForm {
            username: "   ".to_string(),
            password: "secret".to_string(),
        };
        assert!(!form.can_submit());
    }

    #[test]
    fn test_username_without_password_can_submit() {
        let form = LoginForm {
            username: "rosa".to_string(),
            password: String::new(),
        };
        assert!(form.can_submit());
    }
}
