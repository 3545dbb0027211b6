//! # Offer Client
//!
//! In-memory offer service. Wraps a `StoreClient<Offer>` and implements
//! [`OfferLookup`]. An optional latency makes it behave like the slow
//! remote service it stands in for.
use crate::lookup::{LookupError, OfferLookup};
use crate::model::{Offer, OfferId};
use async_trait::async_trait;
use record_store::StoreClient;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the offer store.
#[derive(Clone)]
pub struct OfferClient {
    inner: StoreClient<Offer>,
    latency: Duration,
}

impl OfferClient {
    pub fn new(inner: StoreClient<Offer>) -> Self {
        Self {
            inner,
            latency: Duration::ZERO,
        }
    }

    /// Delays every lookup by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[instrument(skip(self))]
    pub async fn add_offer(&self, offer: Offer) -> Result<(), LookupError> {
        debug!("Sending request");
        self.inner.insert(offer).await?;
        Ok(())
    }
}

#[async_trait]
impl OfferLookup for OfferClient {
    #[instrument(skip(self))]
    async fn fetch_offer(&self, offer_id: OfferId) -> Result<Offer, LookupError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!("Sending request");
        self.inner
            .get(offer_id)
            .await?
            .ok_or_else(|| LookupError::not_found(offer_id))
    }
}
