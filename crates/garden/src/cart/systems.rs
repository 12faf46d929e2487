use bevy::prelude::*;

use crate::catalog::{Product, ProductFilter};
use crate::content::GardenContent;
use crate::notifications::NotificationEvent;

use super::types::{CartState, CartSummary, QuantityChange};

// =============================================================================
// Events
// =============================================================================

/// A cart operation requested by the view. All operations share one event
/// type so they apply in the order they were sent.
#[derive(Event, Debug, Clone)]
pub enum CartEvent {
    Add(Product),
    Remove {
        id: String,
    },
    /// `desired` is signed so the view can send `quantity - 1` without
    /// underflow; values below 1 remove the item.
    ChangeQuantity {
        id: String,
        desired: i64,
    },
    Clear,
}

// =============================================================================
// Systems
// =============================================================================

pub(crate) fn handle_cart_events(
    mut events: EventReader<CartEvent>,
    mut cart: ResMut<CartState>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for event in events.read() {
        match event {
            CartEvent::Add(product) => {
                let item = cart.add_item(product);
                notifications.send(NotificationEvent::positive(format!(
                    "Added {} to cart ({} in cart)",
                    item.name, item.quantity
                )));
            }
            CartEvent::Remove { id } => {
                if cart.remove_item(id).is_none() {
                    debug!("Cart: remove for unknown item '{}' ignored", id);
                }
            }
            CartEvent::ChangeQuantity { id, desired } => match QuantityChange::from_desired(*desired) {
                QuantityChange::Remove => {
                    if cart.remove_item(id).is_none() {
                        debug!("Cart: remove for unknown item '{}' ignored", id);
                    }
                }
                QuantityChange::Set(quantity) => {
                    if let Err(e) = cart.update_quantity(id, quantity) {
                        debug!("Cart: quantity change ignored: {e}");
                    }
                }
            },
            CartEvent::Clear => {
                if !cart.is_empty() {
                    cart.clear();
                    notifications.send(NotificationEvent::info("Cart cleared"));
                }
            }
        }
    }
}

pub(crate) fn refresh_cart_summary(
    cart: Res<CartState>,
    filter: Res<ProductFilter>,
    content: Res<GardenContent>,
    mut summary: ResMut<CartSummary>,
) {
    *summary = CartSummary::compute(&cart, &content.products, &filter);
}
