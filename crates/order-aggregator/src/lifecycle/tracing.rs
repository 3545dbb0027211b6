//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, inserts, shutdown with final size
//! - **Enrichment**: an `enrich{seller_id=...}` span around every request
//! - **Lookups**: start and outcome of each dependent lookup, inside the request span
//! - **Failures**: order failures and dependent failures, with the cause
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per enriched order
//! RUST_LOG=debug cargo run    # every lookup and store request
//! ```
//!
//! ## Reading Dependent Failures
//!
//! The enriched result looks the same whether an offer was missing or the
//! offer service failed. The log level tells them apart:
//!
//! ```text
//! WARN enrich{seller_id=SellerId(3)}: Dependent record not found dependency="offer" key=offer_300 error=Not found: offer_300
//! ERROR enrich{seller_id=SellerId(4)}: Dependent service failed dependency="product" key=product_400 error=Service unavailable: ...
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
