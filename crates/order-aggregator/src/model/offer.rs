//! Represents a seller's offer for a product.
//!
//! # Record Store
//! Offers are stored keyed by their own [`OfferId`].

use record_store::Record;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OfferId(pub u32);

impl From<u32> for OfferId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offer_{}", self.0)
    }
}

/// Condition of the item on offer.
///
/// `Unknown` doubles as the value reported for an order whose offer could
/// not be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferCondition {
    New,
    AsNew,
    Good,
    Considerable,
    Reasonable,
    Available,
    #[default]
    Unknown,
}

impl Display for OfferCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::New => "NEW",
            Self::AsNew => "AS_NEW",
            Self::Good => "GOOD",
            Self::Considerable => "CONSIDERABLE",
            Self::Reasonable => "REASONABLE",
            Self::Available => "AVAILABLE",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub condition: OfferCondition,
}

impl Offer {
    pub fn new(id: OfferId, condition: OfferCondition) -> Self {
        Self { id, condition }
    }
}

impl Record for Offer {
    type Key = OfferId;

    fn key(&self) -> OfferId {
        self.id
    }
}
