use std::fmt;

use bevy::prelude::*;

use crate::catalog::{filter_indices, Product, ProductCategory, ProductFilter};
use crate::config::{MAX_SUGGESTIONS, TAX_RATE};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// No line item with this id.
    NotFound(String),
    /// Quantities below 1 are never stored; callers remove the item instead.
    InvalidQuantity(u32),
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::NotFound(id) => write!(f, "No cart item with id '{id}'"),
            CartError::InvalidQuantity(q) => {
                write!(f, "Invalid quantity {q}: remove the item instead")
            }
        }
    }
}

impl std::error::Error for CartError {}

// =============================================================================
// CartItem
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: ProductCategory,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// CartState
// =============================================================================

/// Cart line items and their total.
///
/// Fields are private: `total` is recomputed after every mutation and can
/// only be read. The cart lives for the session and is not persisted.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
    total: f64,
}

impl CartState {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity))
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Add one unit of `product`, appending a new line item if needed.
    pub fn add_item(&mut self, product: &Product) -> &CartItem {
        let index = match self.items.iter().position(|i| i.id == product.id) {
            Some(index) => {
                self.items[index].quantity = self.items[index].quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(CartItem::from_product(product));
                self.items.len() - 1
            }
        };
        self.recompute_total();
        &self.items[index]
    }

    /// Remove the line item with `id`. Returns `None` if it was not in the cart.
    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        let removed = self.items.remove(index);
        self.recompute_total();
        Some(removed)
    }

    /// Set the quantity of an existing line item. Quantities below 1 are
    /// rejected and leave the cart unchanged.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CartError::NotFound(id.to_string()))?;
        item.quantity = quantity;
        self.recompute_total();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

// =============================================================================
// Quantity requests
// =============================================================================

/// What a change-quantity request turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Remove,
    Set(u32),
}

impl QuantityChange {
    /// Desired quantities below 1 become a removal.
    pub fn from_desired(desired: i64) -> Self {
        if desired < 1 {
            QuantityChange::Remove
        } else {
            QuantityChange::Set(u32::try_from(desired).unwrap_or(u32::MAX))
        }
    }
}

// =============================================================================
// CartSummary projection
// =============================================================================

/// Order summary derived from the cart. Recomputed only when the cart, the
/// product filter or the catalog changes.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub item_count: u32,
    pub line_count: usize,
    pub subtotal: f64,
    pub tax: f64,
    pub grand_total: f64,
    /// Indices into the product catalog of products not yet in the cart.
    pub suggestions: Vec<usize>,
    pub checkout_enabled: bool,
}

impl CartSummary {
    pub fn compute(cart: &CartState, products: &[Product], filter: &ProductFilter) -> Self {
        let subtotal = cart.total();
        let suggestions = filter_indices(products, &filter.search, &filter.category)
            .into_iter()
            .filter(|&i| !cart.contains(&products[i].id))
            .take(MAX_SUGGESTIONS)
            .collect();
        Self {
            item_count: cart.item_count(),
            line_count: cart.items().len(),
            subtotal,
            tax: subtotal * TAX_RATE,
            grand_total: subtotal * (1.0 + TAX_RATE),
            suggestions,
            checkout_enabled: !cart.is_empty(),
        }
    }
}

/// `$x.xx`
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
