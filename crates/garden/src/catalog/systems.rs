use bevy::prelude::*;

use crate::content::GardenContent;

use super::filter::{categories, filter_indices, CategoryFilter};
use super::EmptyState;

// =============================================================================
// Filter inputs
// =============================================================================

/// Gallery search input, edited by the gallery page.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub search: String,
    pub category: CategoryFilter,
}

/// Product search input. Narrows the cart's "add more items" suggestions.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryViewMode {
    #[default]
    Grid,
    List,
}

/// Presentation state of the gallery that does not affect filtering.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryViewState {
    pub mode: GalleryViewMode,
    /// Id of the image shown in the detail window.
    pub selected: Option<String>,
}

impl GalleryViewState {
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Memoized gallery projection. Recomputed only when the content or the
/// gallery filter changes.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    /// Indices into `GardenContent::images`, in catalog order.
    pub indices: Vec<usize>,
    /// Size of the unfiltered gallery.
    pub total: usize,
    /// Category selectors, `"all"` first.
    pub categories: Vec<String>,
}

impl GalleryView {
    pub fn compute(content: &GardenContent, filter: &GalleryFilter) -> Self {
        Self {
            indices: filter_indices(&content.images, &filter.search, &filter.category),
            total: content.images.len(),
            categories: categories(&content.images),
        }
    }

    pub fn shown(&self) -> usize {
        self.indices.len()
    }

    /// "Showing N of M images".
    pub fn summary_line(&self) -> String {
        format!("Showing {} of {} images", self.shown(), self.total)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.indices.is_empty() {
            Some(EmptyState {
                title: "No images found",
                hint: "Try adjusting your search terms or category filter",
            })
        } else {
            None
        }
    }
}

pub(crate) fn refresh_gallery_view(
    content: Res<GardenContent>,
    filter: Res<GalleryFilter>,
    mut view: ResMut<GalleryView>,
) {
    *view = GalleryView::compute(&content, &filter);
    debug!("Gallery view: {}", view.summary_line());
}
