//! Merge policy for an order and its (possibly absent) offer and product.

use crate::model::{EnrichedOrder, Offer, Order, Product};

/// Merges an order with whatever the dependent lookups produced.
///
/// Pure and total: each of the four present/absent combinations yields exactly
/// one shape. The offer and product halves are filled independently.
///
/// | offer | product | offer fields       | product fields     |
/// |-------|---------|--------------------|--------------------|
/// | some  | some    | id, condition      | id, title          |
/// | none  | some    | `None`, `Unknown`  | id, title          |
/// | some  | none    | id, condition      | `None`, `None`     |
/// | none  | none    | `None`, `Unknown`  | `None`, `None`     |
pub fn combine(order: &Order, offer: Option<Offer>, product: Option<Product>) -> EnrichedOrder {
    EnrichedOrder::new(
        order.id,
        offer.map(|o| (o.id, o.condition)),
        product.map(|p| (p.id, p.title)),
    )
}
