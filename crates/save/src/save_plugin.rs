use bevy::prelude::*;
use garden::storage::LocalStorage;

#[cfg(target_arch = "wasm32")]
use crate::browser_store::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
use crate::file_store::FileStore;

/// Location of the native storage file. Insert before adding `SavePlugin`
/// to override the default.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(pub std::path::PathBuf);

impl Default for StoragePath {
    fn default() -> Self {
        Self(garden::config::DEFAULT_STORAGE_FILE.into())
    }
}

/// Installs the platform storage backend into `LocalStorage`: a JSON file on
/// native, `window.localStorage` on WASM. Persisted resources are restored
/// from it at startup by `GardenPlugin`.
pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let path = app
                .world()
                .get_resource::<StoragePath>()
                .cloned()
                .unwrap_or_default();
            info!("Using file storage at {}", path.0.display());
            app.insert_resource(LocalStorage::new(FileStore::open(path.0.clone())));
            app.insert_resource(path);
        }

        #[cfg(target_arch = "wasm32")]
        {
            info!("Using browser localStorage");
            app.insert_resource(LocalStorage::new(BrowserStore));
        }
    }
}
