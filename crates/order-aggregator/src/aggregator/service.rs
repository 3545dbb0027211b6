//! The enrichment orchestrator.

use crate::aggregator::{combine, AggregatorError};
use crate::config::AggregatorConfig;
use crate::lookup::{LookupError, OfferLookup, OrderLookup, ProductLookup};
use crate::model::{EnrichedOrder, Order, SellerId};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, instrument, warn, Instrument};

/// Enriches orders with offer and product details.
///
/// # Request Flow
///
/// 1. **Order**: fetched first. If this fails the request fails with
///    [`AggregatorError::OrderLookup`] and nothing else is called.
/// 2. **Fan-out**: the offer and product lookups are spawned as two tasks.
///    Each holds a permit from a semaphore shared by every request on this
///    service, which bounds how many dependent lookups run at once.
/// 3. **Join**: both tasks are awaited to completion. A failed or panicked
///    lookup becomes `None` after being logged; it never cancels the other.
/// 4. **Merge**: [`combine`] builds the result.
///
/// Spawned lookups are not cancelled if the `enrich` future is dropped; they
/// run to completion and release their permits.
///
/// Cloning is cheap and clones share the same permit pool.
#[derive(Clone)]
pub struct AggregatorService {
    orders: Arc<dyn OrderLookup>,
    offers: Arc<dyn OfferLookup>,
    products: Arc<dyn ProductLookup>,
    lookup_permits: Arc<Semaphore>,
}

impl AggregatorService {
    /// Creates a service allowing `max_concurrent_lookups` dependent lookups in flight.
    ///
    /// A single request needs two permits to run its lookups side by side, so
    /// values below two are raised to two.
    pub fn new(
        orders: Arc<dyn OrderLookup>,
        offers: Arc<dyn OfferLookup>,
        products: Arc<dyn ProductLookup>,
        max_concurrent_lookups: usize,
    ) -> Self {
        Self {
            orders,
            offers,
            products,
            lookup_permits: Arc::new(Semaphore::new(max_concurrent_lookups.max(2))),
        }
    }

    pub fn from_config(
        config: &AggregatorConfig,
        orders: Arc<dyn OrderLookup>,
        offers: Arc<dyn OfferLookup>,
        products: Arc<dyn ProductLookup>,
    ) -> Self {
        Self::new(orders, offers, products, config.max_concurrent_lookups)
    }

    /// Number of lookup permits currently free.
    pub fn available_lookup_permits(&self) -> usize {
        self.lookup_permits.available_permits()
    }

    /// Builds the enriched view of the order placed by `seller_id`.
    ///
    /// Returns `Err` only when the order itself cannot be fetched.
    #[instrument(skip(self))]
    pub async fn enrich(&self, seller_id: SellerId) -> Result<EnrichedOrder, AggregatorError> {
        let order = self.fetch_order(seller_id).await?;

        let offers = Arc::clone(&self.offers);
        let offer_id = order.offer_id;
        let offer_task = self.spawn_lookup("offer", offer_id, async move {
            offers.fetch_offer(offer_id).await
        });

        let products = Arc::clone(&self.products);
        let product_id = order.product_id;
        let product_task = self.spawn_lookup("product", product_id, async move {
            products.fetch_product(product_id).await
        });

        let (offer, product) = tokio::join!(offer_task, product_task);
        let offer = settle("offer", offer);
        let product = settle("product", product);
        debug!(
            offer_found = offer.is_some(),
            product_found = product.is_some(),
            "Dependent lookups joined"
        );

        let enriched = combine(&order, offer, product);
        info!(order_id = %enriched.order_id(), complete = enriched.is_complete(), "Order enriched");
        Ok(enriched)
    }

    async fn fetch_order(&self, seller_id: SellerId) -> Result<Order, AggregatorError> {
        match self.orders.fetch_order(seller_id).await {
            Ok(order) => {
                debug!(order_id = %order.id, "Order retrieved");
                Ok(order)
            }
            Err(source) => {
                error!(error = %source, "Order service failed");
                Err(AggregatorError::OrderLookup { seller_id, source })
            }
        }
    }

    /// Spawns one dependent lookup holding a permit until it finishes.
    fn spawn_lookup<T, K, F>(
        &self,
        dependency: &'static str,
        key: K,
        lookup: F,
    ) -> JoinHandle<Option<T>>
    where
        T: Send + 'static,
        K: Display + Send + 'static,
        F: Future<Output = Result<T, LookupError>> + Send + 'static,
    {
        let permits = Arc::clone(&self.lookup_permits);
        let task = async move {
            // The semaphore is never closed, so acquiring only waits.
            let _permit = permits.acquire_owned().await.ok();
            debug!(dependency, %key, "Lookup task started");
            match lookup.await {
                Ok(record) => {
                    debug!(dependency, %key, "Lookup succeeded");
                    Some(record)
                }
                Err(e) => {
                    report_soft_failure(dependency, &key, &e);
                    None
                }
            }
        };
        tokio::spawn(task.in_current_span())
    }
}

fn report_soft_failure(dependency: &'static str, key: &dyn Display, error: &LookupError) {
    match error {
        LookupError::NotFound(_) => {
            warn!(dependency, %key, error = %error, "Dependent record not found")
        }
        LookupError::Unavailable(_) => {
            error!(dependency, %key, error = %error, "Dependent service failed")
        }
    }
}

fn settle<T>(dependency: &'static str, joined: Result<Option<T>, JoinError>) -> Option<T> {
    match joined {
        Ok(record) => record,
        Err(e) => {
            error!(dependency, error = %e, "Lookup task panicked");
            None
        }
    }
}
