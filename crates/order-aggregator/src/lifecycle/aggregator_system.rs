use crate::aggregator::AggregatorService;
use crate::clients::{OfferClient, OrderClient, ProductClient};
use crate::config::AggregatorConfig;
use crate::model::{Offer, Order, Product};
use record_store::StoreActor;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running system: three in-memory services and an aggregator wired to them.
///
/// # Example
///
/// ```ignore
/// let system = AggregatorSystem::new(&AggregatorConfig::default());
///
/// system.order_client.add_order(order).await?;
/// let enriched = system.aggregator.enrich(SellerId(7)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct AggregatorSystem {
    /// Client for the order store
    pub order_client: OrderClient,

    /// Client for the offer store
    pub offer_client: OfferClient,

    /// Client for the product store
    pub product_client: ProductClient,

    /// Aggregator reading from the three stores
    pub aggregator: AggregatorService,

    /// Task handles for the store actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl AggregatorSystem {
    /// Creates the stores, spawns their actors and wires the aggregator.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &AggregatorConfig) -> Self {
        let (order_actor, order_store) = StoreActor::<Order>::new(config.store_buffer_size);
        let (offer_actor, offer_store) = StoreActor::<Offer>::new(config.store_buffer_size);
        let (product_actor, product_store) =
            StoreActor::<Product>::new(config.store_buffer_size);

        let handles = vec![
            tokio::spawn(order_actor.run()),
            tokio::spawn(offer_actor.run()),
            tokio::spawn(product_actor.run()),
        ];

        let order_client = OrderClient::new(order_store);
        let offer_client = OfferClient::new(offer_store).with_latency(config.offer_latency());
        let product_client =
            ProductClient::new(product_store).with_latency(config.product_latency());

        let aggregator = AggregatorService::from_config(
            config,
            Arc::new(order_client.clone()),
            Arc::new(offer_client.clone()),
            Arc::new(product_client.clone()),
        );

        info!(
            max_concurrent_lookups = config.max_concurrent_lookups,
            "Aggregator system started"
        );

        Self {
            order_client,
            offer_client,
            product_client,
            aggregator,
            handles,
        }
    }

    /// Gracefully shuts down the stores.
    ///
    /// Dropping the clients and the aggregator closes every store channel, and
    /// each actor exits its loop. Clones of the clients or the aggregator held
    /// elsewhere keep their store alive, so drop those first.
    ///
    /// Returns the first error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.aggregator);
        drop(self.order_client);
        drop(self.offer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
