//! Top-level page state.
//!
//! Defines [`Page`], a Bevy [`States`] enum selecting which view is shown.
//! Each page's view system is gated on `in_state(Page::...)`, so only the
//! active page renders.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Habits,
    Gallery,
    Cart,
    Login,
}

impl Page {
    /// Pages linked from the navigation bar, in display order. `Cart` and
    /// `Login` get dedicated buttons.
    pub const NAV_LINKS: &'static [Page] = &[Page::Home, Page::Habits, Page::Gallery];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Habits => "Habits",
            Page::Gallery => "Gallery",
            Page::Cart => "Cart",
            Page::Login => "Login",
        }
    }
}

/// Plugin that initializes the [`Page`] state.
///
/// Requires `StatesPlugin` (part of `DefaultPlugins`; the test harness adds
/// it explicitly).
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Page>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_nav_links_have_labels() {
        for page in Page::NAV_LINKS {
            assert!(!page.label().is_empty());
        }
        assert!(!Page::NAV_LINKS.contains(&Page::Cart));
    }
}
