//! Integration tests for the garden using the `TestGarden` harness.
//!
//! These spin up a headless Bevy App with `GardenPlugin` and drive it through
//! events, the same way the UI does.

mod habit_persistence_tests;
mod session_tests;

use crate::app_state::Page;
use crate::cart::CartState;
use crate::habits::HabitStore;
use crate::test_harness::TestGarden;

#[test]
fn fresh_garden_starts_on_home_with_seeded_habits() {
    let garden = TestGarden::new();
    assert_eq!(garden.page(), Page::Home);
    assert_eq!(garden.resource::<HabitStore>().len(), 8);
    assert!(garden.resource::<CartState>().is_empty());
}

#[test]
fn page_changes_apply_on_next_frame() {
    let mut garden = TestGarden::new();
    garden
        .resource_mut::<bevy::prelude::NextState<Page>>()
        .set(Page::Gallery);
    garden.update();
    assert_eq!(garden.page(), Page::Gallery);
}
