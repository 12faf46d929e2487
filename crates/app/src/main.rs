use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use garden::content::GardenContent;

/// Optional JSON document replacing the built-in catalog, FAQ and habit seed.
const CONTENT_ENV: &str = "GARDEN_CONTENT";
/// Path of the native storage file.
#[cfg(not(target_arch = "wasm32"))]
const STORAGE_ENV: &str = "GARDEN_STORAGE";

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Garden Habits".to_string(),
            resolution: (1280.0, 800.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // The UI only changes on input or when a toast expires.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(500)),
    })
    .insert_resource(ClearColor(Color::srgb(0.976, 0.980, 0.984)))
    .add_systems(Startup, spawn_camera);

    if let Some(content) = load_content() {
        app.insert_resource(content);
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(path) = std::env::var(STORAGE_ENV) {
        app.insert_resource(save::StoragePath(path.into()));
    }

    app.add_plugins((garden::GardenPlugin, save::SavePlugin, ui::UiPlugin));

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Reads `GARDEN_CONTENT` if set. Unreadable or invalid content falls back to
/// the built-in samples.
fn load_content() -> Option<GardenContent> {
    let path = std::env::var(CONTENT_ENV).ok()?;
    match std::fs::read_to_string(&path) {
        Ok(json) => {
            info!("Loading garden content from {path}");
            Some(GardenContent::from_json_or_default(&json))
        }
        Err(e) => {
            warn!("Could not read garden content from {path}: {e}, using built-in samples");
            None
        }
    }
}
