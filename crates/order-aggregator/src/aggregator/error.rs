//! Error types for the aggregator.

use crate::lookup::LookupError;
use crate::model::SellerId;
use thiserror::Error;

/// Errors that abort an enrichment.
///
/// Offer and product failures never show up here; they are absorbed into the
/// [`EnrichedOrder`](crate::model::EnrichedOrder) as absent fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregatorError {
    /// The order for the seller could not be retrieved.
    #[error("Order service failed for {seller_id}: {source}")]
    OrderLookup {
        seller_id: SellerId,
        source: LookupError,
    },
}
