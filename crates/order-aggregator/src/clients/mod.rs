//! In-memory lookup services built on [`record_store`].
//!
//! Each client wraps a `StoreClient<T>` and implements one of the
//! [`lookup`](crate::lookup) traits, translating store answers:
//! `Some(record)` is a hit, `None` is [`LookupError::NotFound`](crate::lookup::LookupError::NotFound),
//! and a store failure is [`LookupError::Unavailable`](crate::lookup::LookupError::Unavailable).

pub mod offer_client;
pub mod order_client;
pub mod product_client;

pub use offer_client::OfferClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
