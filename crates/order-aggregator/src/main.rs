//! # Order Aggregator Demo
//!
//! Starts the in-memory services, seeds a few orders and enriches them:
//! one complete, one with a missing offer, one with a missing product, and
//! one seller with no order at all.

use order_aggregator::config::AggregatorConfig;
use order_aggregator::lifecycle::{setup_tracing, AggregatorSystem};
use order_aggregator::model::{
    Offer, OfferCondition, OfferId, Order, OrderId, Product, ProductId, SellerId,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AggregatorConfig::from_env()?;
    info!(?config, "Starting order aggregator demo");

    let system = AggregatorSystem::new(&config);

    let span = tracing::info_span!("seeding");
    async {
        info!("Seeding orders, offers and products");
        system
            .order_client
            .add_order(Order::new(OrderId(1), SellerId(1), OfferId(100), ProductId(200)))
            .await?;
        system
            .order_client
            .add_order(Order::new(OrderId(2), SellerId(2), OfferId(101), ProductId(201)))
            .await?;
        system
            .order_client
            .add_order(Order::new(OrderId(3), SellerId(3), OfferId(102), ProductId(202)))
            .await?;

        system
            .offer_client
            .add_offer(Offer::new(OfferId(100), OfferCondition::New))
            .await?;
        system
            .offer_client
            .add_offer(Offer::new(OfferId(102), OfferCondition::Good))
            .await?;

        system
            .product_client
            .add_product(Product::new(ProductId(200), "Widget"))
            .await?;
        system
            .product_client
            .add_product(Product::new(ProductId(201), "Gadget"))
            .await
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("enrichment");
    async {
        for seller_id in [1, 2, 3, 99].map(SellerId) {
            match system.aggregator.enrich(seller_id).await {
                Ok(enriched) => info!(
                    %seller_id,
                    order_id = %enriched.order_id(),
                    offer_id = enriched.legacy_offer_id(),
                    condition = %enriched.offer_condition(),
                    product_id = enriched.legacy_product_id(),
                    title = enriched.product_title().unwrap_or("-"),
                    "Enriched order"
                ),
                Err(e) => error!(%seller_id, error = %e, "Enrichment failed"),
            }
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
