//! Pure data structures shared by the lookup services and the aggregator.
//!
//! [`Order`], [`Offer`] and [`Product`] implement [`Record`](record_store::Record)
//! so the in-memory services can keep them in a store actor.

pub mod enriched;
pub mod offer;
pub mod order;
pub mod product;

pub use enriched::*;
pub use offer::*;
pub use order::*;
pub use product::*;
