//! # Lookup Interfaces
//!
//! The aggregator never talks to a store, a socket, or an actor directly. It
//! sees three narrow traits, one per downstream service, each resolving a key
//! to a record or failing with a [`LookupError`].
//!
//! ```rust,ignore
//! let order = orders.fetch_order(seller_id).await?;
//! let offer = offers.fetch_offer(order.offer_id).await?;
//! let product = products.fetch_product(order.product_id).await?;
//! ```
//!
//! The in-memory [`clients`](crate::clients) implement all three. Tests
//! implement them with hand-written doubles to script failures and delays.

pub mod error;

pub use error::*;

use crate::model::{Offer, OfferId, Order, Product, ProductId, SellerId};
use async_trait::async_trait;

/// Resolves a seller to its order. Failure here is fatal to an enrichment.
#[async_trait]
pub trait OrderLookup: Send + Sync {
    async fn fetch_order(&self, seller_id: SellerId) -> Result<Order, LookupError>;
}

/// Resolves an offer id to the offer details.
#[async_trait]
pub trait OfferLookup: Send + Sync {
    async fn fetch_offer(&self, offer_id: OfferId) -> Result<Offer, LookupError>;
}

/// Resolves a product id to the product details.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, LookupError>;
}
