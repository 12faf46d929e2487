//! Shopping cart.
//!
//! `CartState` holds the line items. Views never touch it directly: they send
//! `CartEvent`s which `handle_cart_events` applies during `GardenSet::Mutate`,
//! after which `CartSummary` is recomputed.

use bevy::prelude::*;

use crate::catalog::ProductFilter;
use crate::content::GardenContent;
use crate::GardenSet;

pub mod systems;
pub mod types;


pub use systems::CartEvent;
pub use types::{format_price, CartError, CartItem, CartState, CartSummary, QuantityChange};

pub struct CartPlugin;

impl Plugin for CartPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CartState>()
            .init_resource::<CartSummary>()
            .add_event::<CartEvent>()
            .add_systems(
                Update,
                (
                    systems::handle_cart_events.in_set(GardenSet::Mutate),
                    systems::refresh_cart_summary
                        .run_if(
                            resource_changed::<CartState>
                                .or(resource_changed::<ProductFilter>)
                                .or(resource_changed::<GardenContent>),
                        )
                        .in_set(GardenSet::Project),
                ),
            );
    }
}
