//! # Order Client
//!
//! In-memory order service. Wraps a `StoreClient<Order>` and implements
//! [`OrderLookup`] on top of it.
use crate::lookup::{LookupError, OrderLookup};
use crate::model::{Order, SellerId};
use async_trait::async_trait;
use record_store::StoreClient;
use tracing::{debug, instrument};

/// Client for the order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores `order` under its seller, replacing any previous order for that seller.
    #[instrument(skip(self))]
    pub async fn add_order(&self, order: Order) -> Result<(), LookupError> {
        debug!("Sending request");
        self.inner.insert(order).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderLookup for OrderClient {
    #[instrument(skip(self))]
    async fn fetch_order(&self, seller_id: SellerId) -> Result<Order, LookupError> {
        debug!("Sending request");
        self.inner
            .get(seller_id)
            .await?
            .ok_or_else(|| LookupError::not_found(seller_id))
    }
}
