use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use garden::app_state::Page;
use garden::GardenSet;

pub mod cart_page;
pub mod gallery_page;
pub mod habits_page;
pub mod home_page;
pub mod login_page;
pub mod navbar;
pub mod notification_ticker;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<login_page::LoginForm>()
            .init_resource::<notification_ticker::NotificationJournalVisible>()
            .add_systems(Startup, theme::apply_garden_theme)
            // The navbar is a top panel and must be laid out before the
            // page's central panel in the same frame.
            .add_systems(
                Update,
                (
                    navbar::navbar_ui,
                    (
                        home_page::home_page_ui.run_if(in_state(Page::Home)),
                        habits_page::habits_page_ui.run_if(in_state(Page::Habits)),
                        gallery_page::gallery_page_ui.run_if(in_state(Page::Gallery)),
                        gallery_page::image_detail_ui.run_if(in_state(Page::Gallery)),
                        cart_page::cart_page_ui.run_if(in_state(Page::Cart)),
                        login_page::login_page_ui.run_if(in_state(Page::Login)),
                    ),
                    (
                        notification_ticker::notification_ticker_ui,
                        notification_ticker::notification_journal_ui,
                    ),
                )
                    .chain()
                    .in_set(GardenSet::Input),
            );
    }
}
