//! # Order Aggregator
//!
//! Enriches a seller's order with details from two slower services, the
//! offer service and the product service, and returns a single merged
//! [`EnrichedOrder`](model::EnrichedOrder).
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`aggregator`])
//! [`AggregatorService::enrich`](aggregator::AggregatorService::enrich) fetches the order,
//! runs the offer and product lookups concurrently, tolerates either one failing,
//! and merges the result with [`combine`](aggregator::combine).
//!
//! ### 2. The Seams ([`lookup`])
//! One trait per downstream service. The aggregator depends only on these.
//!
//! ### 3. The Services ([`clients`])
//! In-memory implementations of the lookup traits on top of
//! [`record_store`] actors.
//!
//! ### 4. The Wiring ([`lifecycle`], [`config`])
//! [`AggregatorSystem`](lifecycle::AggregatorSystem) starts the stores and the
//! aggregator; [`AggregatorConfig`](config::AggregatorConfig) sizes them.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-aggregator
//! RUST_LOG=debug AGGREGATOR_OFFER_LATENCY_MS=200 cargo run -p order-aggregator
//! ```

pub mod aggregator;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod lookup;
pub mod model;
