use bevy::prelude::*;

pub mod app_state;
pub mod cart;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod content;
pub mod habits;
pub mod notifications;
pub mod sample_data;
pub mod session;
pub mod storage;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

use std::marker::PhantomData;

use storage::{KeyValueStore, LocalStorage, StorageError};

// ---------------------------------------------------------------------------
// Persisted trait + registry for key-value storage
// ---------------------------------------------------------------------------

/// Trait for resources that are stored as a single value under a fixed key.
///
/// A feature plugin calls `app.register_persisted::<T>()` once; the resource is
/// then restored at startup and written back whenever it changes, without any
/// storage code in the feature itself.
pub trait Persisted: Resource + Sized {
    /// Key under which the serialized value is stored. Must stay stable, it is
    /// what already-persisted sessions are read back from.
    const STORAGE_KEY: &'static str;

    /// Value used when nothing is stored yet or the stored value is unusable.
    fn seed(world: &World) -> Self;

    /// Serialize this resource into its stored string form.
    fn to_stored(&self) -> Result<String, StorageError>;

    /// Parse a stored string back into the resource.
    fn from_stored(raw: &str) -> Result<Self, StorageError>;
}

/// Read `T` from storage, falling back to `T::seed` when the key is absent or
/// the stored value does not parse. The seed is written back so the next
/// session starts from a well-formed value.
pub fn restore_or_seed<T: Persisted>(world: &World, store: &mut dyn KeyValueStore) -> T {
    let key = T::STORAGE_KEY;
    match store.get(key) {
        Ok(Some(raw)) => match T::from_stored(&raw) {
            Ok(value) => return value,
            Err(e) => warn!(
                "Persisted {}: stored value ({} bytes) is malformed, falling back to seed data: {}",
                key,
                raw.len(),
                e
            ),
        },
        Ok(None) => debug!("Persisted {}: nothing stored yet, seeding", key),
        Err(e) => {
            // Leave whatever is stored alone; the backend may recover next session.
            warn!("Persisted {}: storage read failed, using seed data: {}", key, e);
            return T::seed(world);
        }
    }

    let seed = T::seed(world);
    if let Err(e) = write_persisted(&seed, store) {
        warn!("Persisted {}: failed to store seed data: {}", key, e);
    }
    seed
}

/// Serialize `value` and store it under `T::STORAGE_KEY`.
pub fn write_persisted<T: Persisted>(value: &T, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    let raw = value.to_stored()?;
    store.set(T::STORAGE_KEY, &raw)
}

/// Serialized form of `T` known to match what storage holds.
///
/// The writer compares against it so restoring (or re-setting an unchanged
/// value) does not rewrite storage. After a failed read it holds the seed, so
/// the unreadable value is only overwritten once the user changes something.
#[derive(Resource)]
pub struct PersistBaseline<T: Persisted> {
    pub stored: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Persisted> PersistBaseline<T> {
    pub fn new(stored: Option<String>) -> Self {
        Self {
            stored,
            _marker: PhantomData,
        }
    }
}

impl<T: Persisted> Default for PersistBaseline<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Type alias for the restore function stored in a `PersistedEntry`.
pub type RestoreFn = Box<dyn Fn(&mut World, &mut dyn KeyValueStore) + Send + Sync>;

/// Type-erased restore operation for a single registered resource.
pub struct PersistedEntry {
    pub key: &'static str,
    pub restore_fn: RestoreFn,
}

/// Registry of all persisted resources, populated during plugin setup.
#[derive(Resource, Default)]
pub struct PersistedRegistry {
    pub entries: Vec<PersistedEntry>,
}

impl PersistedRegistry {
    /// Register a resource type that implements `Persisted`.
    ///
    /// Returns `false` (and keeps the first registration) when a resource with
    /// the same key is already registered.
    pub fn register<T: Persisted>(&mut self) -> bool {
        let key = T::STORAGE_KEY;
        if self.entries.iter().any(|e| e.key == key) {
            warn!(
                "PersistedRegistry: duplicate key '{}', ignoring second registration",
                key
            );
            return false;
        }
        self.entries.push(PersistedEntry {
            key,
            restore_fn: Box::new(|world: &mut World, store: &mut dyn KeyValueStore| {
                let value = restore_or_seed::<T>(world, store);
                let baseline = value.to_stored().ok();
                world.insert_resource(value);
                world.insert_resource(PersistBaseline::<T>::new(baseline));
            }),
        });
        true
    }

    /// Restore every registered resource from `store`.
    pub fn restore_all(&self, world: &mut World, store: &mut dyn KeyValueStore) {
        for entry in &self.entries {
            (entry.restore_fn)(world, store);
        }
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.key).collect()
    }
}

/// Startup system: restores every registered resource from `LocalStorage`.
pub fn restore_persisted(world: &mut World) {
    world.resource_scope(|world, registry: Mut<PersistedRegistry>| {
        world.resource_scope(|world, mut storage: Mut<LocalStorage>| {
            info!(
                "Restoring {} persisted resource(s) from {} storage",
                registry.entries.len(),
                storage.backend_name()
            );
            registry.restore_all(world, storage.store_mut());
        });
    });
}

/// Extension trait on `App` for one-line persisted registration.
///
/// ```ignore
/// app.register_persisted::<HabitStore>();
/// ```
pub trait PersistedAppExt {
    fn register_persisted<T: Persisted>(&mut self) -> &mut Self;
}

impl PersistedAppExt for App {
    fn register_persisted<T: Persisted>(&mut self) -> &mut Self {
        // Insert the seed right away so systems never observe a missing
        // resource; restore_persisted replaces it at startup.
        let seed = T::seed(self.world());
        self.insert_resource(seed);
        self.init_resource::<PersistBaseline<T>>();
        let newly_registered = self
            .world_mut()
            .get_resource_or_insert_with(PersistedRegistry::default)
            .register::<T>();
        if newly_registered {
            self.add_systems(
                Update,
                storage::persist_on_change::<T>
                    .run_if(resource_changed::<T>)
                    .in_set(GardenSet::Persist),
            );
        }
        self
    }
}

// ---------------------------------------------------------------------------
// System ordering
// ---------------------------------------------------------------------------

/// Per-frame ordering of the garden systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GardenSet {
    /// Views render and emit events or edit filter resources.
    Input,
    /// Event handlers apply store operations.
    Mutate,
    /// Memoized projections recompute from changed stores and filters.
    Project,
    /// Changed persisted resources are written to storage.
    Persist,
}

pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GardenSet::Input,
                GardenSet::Mutate,
                GardenSet::Project,
                GardenSet::Persist,
            )
                .chain(),
        )
        .init_resource::<LocalStorage>()
        .init_resource::<PersistedRegistry>()
        .init_resource::<content::GardenContent>()
        .init_resource::<clock::GardenClock>()
        .add_systems(Startup, restore_persisted);

        app.add_plugins((
            app_state::AppStatePlugin,
            notifications::NotificationsPlugin,
            session::SessionPlugin,
            catalog::CatalogPlugin,
            cart::CartPlugin,
            habits::HabitsPlugin,
        ));
    }
}
