//! Represents a seller's order, the record every enrichment starts from.
//!
//! # Record Store
//! Orders are stored keyed by [`SellerId`]: a seller resolves to at most one
//! order, and that order is what `enrich` looks up.

use crate::model::{OfferId, ProductId};
use record_store::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Sellers. This is the key an enrichment is requested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SellerId(pub u32);

impl From<u32> for SellerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seller_{}", self.0)
    }
}

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub seller_id: SellerId,
    pub offer_id: OfferId,
    pub product_id: ProductId,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier of the order
    /// * `seller_id` - Seller the order belongs to (the lookup key)
    /// * `offer_id` - Offer the order was placed against
    /// * `product_id` - Product being ordered
    pub fn new(
        id: OrderId,
        seller_id: SellerId,
        offer_id: OfferId,
        product_id: ProductId,
    ) -> Self {
        Self {
            id,
            seller_id,
            offer_id,
            product_id,
        }
    }
}

impl Record for Order {
    type Key = SellerId;

    fn key(&self) -> SellerId {
        self.seller_id
    }
}
