//! Product catalog and image gallery.
//!
//! Catalog entries are immutable for the lifetime of the app. The only state
//! here is the filter input and the memoized [`GalleryView`] derived from it.

use bevy::prelude::*;

use crate::content::GardenContent;
use crate::GardenSet;

pub mod filter;
pub mod systems;
pub mod types;


pub use filter::{categories, category_label, filter, filter_indices, CategoryFilter, Searchable};
pub use systems::{GalleryFilter, GalleryView, GalleryViewMode, GalleryViewState, ProductFilter};
pub use types::{FaqEntry, Feature, GardenImage, Product, ProductCategory};

/// Message shown in place of an empty result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GalleryFilter>()
            .init_resource::<GalleryViewState>()
            .init_resource::<GalleryView>()
            .init_resource::<ProductFilter>()
            .add_systems(
                Update,
                systems::refresh_gallery_view
                    .run_if(resource_changed::<GardenContent>.or(resource_changed::<GalleryFilter>))
                    .in_set(GardenSet::Project),
            );
    }
}
