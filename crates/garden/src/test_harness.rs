//! # TestGarden: headless test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins`, `StatesPlugin` and
//! `GardenPlugin` over an in-memory store, so integration tests can send
//! events, run frames and inspect resources without a window.

use bevy::app::App;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use chrono::NaiveDate;

use crate::app_state::Page;
use crate::clock::GardenClock;
use crate::content::GardenContent;
use crate::storage::{LocalStorage, MemoryStore};
use crate::GardenPlugin;

/// Builder for a [`TestGarden`]. Everything set here is in place before the
/// first frame (and therefore before persisted resources are restored).
pub struct TestGardenBuilder {
    store: MemoryStore,
    today: NaiveDate,
    content: Option<GardenContent>,
}

impl TestGardenBuilder {
    /// Pre-populate storage.
    pub fn with_storage(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.store = self.store.with_entry(key, value);
        self
    }

    /// Pin the date used for streak bookkeeping.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_content(mut self, content: GardenContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn build(self) -> TestGarden {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);

        app.insert_resource(LocalStorage::new(self.store));
        app.insert_resource(GardenClock::fixed(self.today));
        if let Some(content) = self.content {
            app.insert_resource(content);
        }
        app.add_plugins(GardenPlugin);

        // Run one update so Startup systems execute (restore + session load).
        app.update();

        TestGarden { app }
    }
}

/// A headless garden app for integration testing.
pub struct TestGarden {
    app: App,
}

impl Default for TestGarden {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGarden {
    /// Default date pinned by the harness.
    pub fn default_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 18).unwrap_or_default()
    }

    pub fn builder() -> TestGardenBuilder {
        TestGardenBuilder {
            store: MemoryStore::default(),
            today: Self::default_today(),
            content: None,
        }
    }

    /// Empty storage, built-in content.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Restart the app on a copy of the current storage contents, keeping
    /// everything else at its defaults.
    pub fn restart(&self) -> Self {
        Self::builder().with_storage(self.memory_store()).build()
    }

    // -----------------------------------------------------------------------
    // Driving the app
    // -----------------------------------------------------------------------

    pub fn send<E: Event>(&mut self, event: E) -> &mut Self {
        self.app.world_mut().send_event(event);
        self
    }

    /// Send an event and run one frame.
    pub fn dispatch<E: Event>(&mut self, event: E) -> &mut Self {
        self.send(event);
        self.update();
        self
    }

    /// Run one frame. Page changes requested during a frame apply at the
    /// start of the next one.
    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource_mut<T: Resource>(&mut self) -> Mut<'_, T> {
        self.app.world_mut().resource_mut::<T>()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn page(&self) -> Page {
        *self.resource::<State<Page>>().get()
    }

    /// Raw stored value, as the storage backend holds it.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.resource::<LocalStorage>().get(key).ok().flatten()
    }

    /// Snapshot of every stored key, for restart tests.
    pub fn memory_store(&self) -> MemoryStore {
        let storage = self.resource::<LocalStorage>();
        [
            crate::config::HABITS_KEY,
            crate::config::LOGGED_IN_KEY,
            crate::config::USERNAME_KEY,
        ]
        .iter()
        .fold(MemoryStore::default(), |store, key| {
            match storage.get(key).ok().flatten() {
                Some(value) => store.with_entry(key, &value),
                None => store,
            }
        })
    }
}
