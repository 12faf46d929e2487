use bevy::prelude::*;

use crate::catalog::{filter_indices, CategoryFilter, EmptyState};

use super::types::{completion_rate, HabitStore};

/// Habit list search input, edited by the habits page.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl HabitFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all()
    }
}

/// Memoized habit list projection and stats. Recomputed only when the store
/// or the filter changes.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitView {
    /// Indices into `HabitStore::habits`, in store order.
    pub indices: Vec<usize>,
    pub completed_count: usize,
    pub total: usize,
    pub completion_rate: u32,
    pub categories: Vec<String>,
    pub filter_active: bool,
}

impl HabitView {
    pub fn compute(store: &HabitStore, filter: &HabitFilter) -> Self {
        let completed_count = store.completed_count();
        Self {
            indices: filter_indices(store.habits(), &filter.search, &filter.category),
            completed_count,
            total: store.len(),
            completion_rate: completion_rate(completed_count, store.len()),
            categories: store.categories(),
            filter_active: filter.is_active(),
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.indices.is_empty() {
            return None;
        }
        let hint = if self.filter_active {
            "Try adjusting your search or filter criteria"
        } else {
            "Start by adding your first gardening habit!"
        };
        Some(EmptyState {
            title: "No habits found",
            hint,
        })
    }
}
