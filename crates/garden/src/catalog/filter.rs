//! Search and category filtering shared by the gallery, the product list and
//! the habit list.
//!
//! Filtering is a pure function of the entries, the search string and the
//! category selector. Results keep the original order.

use crate::config::ALL_CATEGORIES;

use super::types::{GardenImage, Product};

/// Category selector: the `"all"` sentinel or one concrete category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a selector as it appears in a category list. `"all"` (any case)
    /// is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Exact, case-insensitive category match.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name.to_lowercase() == category.to_lowercase(),
        }
    }
}

/// An entry that can be searched and grouped by category.
pub trait Searchable {
    /// True if any searchable field contains `query_lower`. The query is
    /// already lowercased.
    fn matches_query(&self, query_lower: &str) -> bool;

    fn category_key(&self) -> &str;
}

fn contains_lower(field: &str, query_lower: &str) -> bool {
    field.to_lowercase().contains(query_lower)
}

impl Searchable for GardenImage {
    fn matches_query(&self, query_lower: &str) -> bool {
        contains_lower(&self.title, query_lower)
            || contains_lower(&self.description, query_lower)
            || self.tags.iter().any(|tag| contains_lower(tag, query_lower))
    }

    fn category_key(&self) -> &str {
        &self.category
    }
}

impl Searchable for Product {
    fn matches_query(&self, query_lower: &str) -> bool {
        contains_lower(&self.name, query_lower) || contains_lower(self.category.as_str(), query_lower)
    }

    fn category_key(&self) -> &str {
        self.category.as_str()
    }
}

/// Indices of the entries matching `query` and `category`, in input order.
/// An empty query matches every entry.
pub fn filter_indices<T: Searchable>(items: &[T], query: &str, category: &CategoryFilter) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| category.matches(item.category_key()) && item.matches_query(&query_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Like [`filter_indices`] but returns the entries.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str, category: &CategoryFilter) -> Vec<&'a T> {
    filter_indices(items, query, category)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// `"all"` followed by the distinct categories in first-seen order.
pub fn categories<T: Searchable>(items: &[T]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        let key = item.category_key();
        if !out.iter().skip(1).any(|c| c == key) {
            out.push(key.to_string());
        }
    }
    out
}

/// Display label for a category selector: "All Categories" for the sentinel,
/// otherwise the category with its first letter capitalized.
pub fn category_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        return "All Categories".to_string();
    }
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
