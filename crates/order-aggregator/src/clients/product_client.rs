//! # Product Client
//!
//! In-memory product service. Wraps a `StoreClient<Product>` and implements
//! [`ProductLookup`].
use crate::lookup::{LookupError, ProductLookup};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use record_store::StoreClient;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
    latency: Duration,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
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
    pub async fn add_product(&self, product: Product) -> Result<(), LookupError> {
        debug!("Sending request");
        self.inner.insert(product).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    #[instrument(skip(self))]
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, LookupError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!("Sending request");
        self.inner
            .get(product_id)
            .await?
            .ok_or_else(|| LookupError::not_found(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_store::mock::MockStore;
    use record_store::StoreError;

    #[tokio::test]
    async fn test_fetch_product_found() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(ProductId(200))
            .return_ok(Some(Product::new(ProductId(200), "Widget")));

        let client = ProductClient::new(mock.client());
        let product = client.fetch_product(ProductId(200)).await.unwrap();
        assert_eq!(product.title, "Widget");
        mock.verify();
    }

    #[tokio::test]
    async fn test_fetch_product_backend_failure() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_get(ProductId(200))
            .return_err(StoreError::Backend("timeout".to_string()));

        let client = ProductClient::new(mock.client());
        let result = client.fetch_product(ProductId(200)).await;
        assert!(matches!(result, Err(LookupError::Unavailable(msg)) if msg.contains("timeout")));
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_product_inserts_into_store() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_insert().return_ok(None);

        let client = ProductClient::new(mock.client());
        client
            .add_product(Product::new(ProductId(1), "Gadget"))
            .await
            .unwrap();
        mock.verify();
    }
}
