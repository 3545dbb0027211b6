//! The merged view of an order and whatever could be learned about its offer
//! and product.

use crate::model::{OfferCondition, OfferId, OrderId, ProductId};
use serde::Serialize;

/// An order enriched with offer and product details.
///
/// The order id is always present. The offer half (`offer_id`,
/// `offer_condition`) and the product half (`product_id`, `product_title`)
/// are each either fully populated or fully absent; an absent offer reports
/// [`OfferCondition::Unknown`]. The fields are private so that the only way
/// to build one is [`combine`](crate::aggregator::combine), which upholds this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedOrder {
    order_id: OrderId,
    offer_id: Option<OfferId>,
    offer_condition: OfferCondition,
    product_id: Option<ProductId>,
    product_title: Option<String>,
}

impl EnrichedOrder {
    /// Id used for an absent offer or product in the integer encoding.
    pub const MISSING_ID: i64 = -1;

    pub(crate) fn new(
        order_id: OrderId,
        offer: Option<(OfferId, OfferCondition)>,
        product: Option<(ProductId, String)>,
    ) -> Self {
        let (offer_id, offer_condition) = match offer {
            Some((id, condition)) => (Some(id), condition),
            None => (None, OfferCondition::Unknown),
        };
        let (product_id, product_title) = match product {
            Some((id, title)) => (Some(id), Some(title)),
            None => (None, None),
        };
        Self {
            order_id,
            offer_id,
            offer_condition,
            product_id,
            product_title,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn offer_id(&self) -> Option<OfferId> {
        self.offer_id
    }

    pub fn offer_condition(&self) -> OfferCondition {
        self.offer_condition
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn product_title(&self) -> Option<&str> {
        self.product_title.as_deref()
    }

    /// True when both dependent lookups contributed.
    pub fn is_complete(&self) -> bool {
        self.offer_id.is_some() && self.product_id.is_some()
    }

    /// Offer id as an integer, [`MISSING_ID`](Self::MISSING_ID) when absent.
    pub fn legacy_offer_id(&self) -> i64 {
        self.offer_id
            .map_or(Self::MISSING_ID, |id| i64::from(id.0))
    }

    /// Product id as an integer, [`MISSING_ID`](Self::MISSING_ID) when absent.
    pub fn legacy_product_id(&self) -> i64 {
        self.product_id
            .map_or(Self::MISSING_ID, |id| i64::from(id.0))
    }
}
