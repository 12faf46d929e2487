//! Platform storage backends for the garden app.

#[cfg(not(target_arch = "wasm32"))]
pub mod file_store;
mod save_plugin;

#[cfg(target_arch = "wasm32")]
pub mod browser_store;

#[cfg(target_arch = "wasm32")]
pub use browser_store::BrowserStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;
pub use save_plugin::{SavePlugin, StoragePath};
