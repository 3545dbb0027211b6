//! # Order Aggregator
//!
//! The core of the crate: [`AggregatorService::enrich`] fetches an order,
//! fans out to the offer and product services, and merges whatever came back.
//!
//! ## Error Policy
//!
//! Exactly one failure crosses this boundary: the order lookup
//! ([`AggregatorError::OrderLookup`]). Offer and product failures are logged
//! and turned into absent fields by [`combine`], so callers either get an
//! error or a fully formed [`EnrichedOrder`](crate::model::EnrichedOrder).
//!
//! A caller cannot tell from the result whether an offer was missing or its
//! service was down. The logs can: `NotFound` is reported at `warn`,
//! `Unavailable` and panics at `error`.

pub mod combine;
pub mod error;
pub mod service;

pub use combine::combine;
pub use error::*;
pub use service::AggregatorService;
