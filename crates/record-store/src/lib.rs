//! # Record Store
//!
//! This crate provides a small, type-safe building block for in-memory lookup
//! services: a keyed record store that lives inside its own Tokio task and is
//! reached only through message passing.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Record`]) - What is stored and how it is keyed
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and ownership of the map
//! 3. **Interface Layer** ([`StoreClient`]) - Cloneable async handle used by services
//!
//! The actor owns its `HashMap` exclusively and processes requests one at a
//! time, so no `Mutex` or `RwLock` is needed for the stored records.
//!
//! ## Example
//!
//! ```rust
//! use record_store::{Record, StoreActor};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Offer {
//!     id: u32,
//!     condition: String,
//! }
//!
//! impl Record for Offer {
//!     type Key = u32;
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Offer>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     client
//!         .insert(Offer { id: 100, condition: "new".into() })
//!         .await
//!         .unwrap();
//!     let offer = client.get(100).await.unwrap().unwrap();
//!     assert_eq!(offer.condition, "new");
//! }
//! ```
//!
//! ## Shutdown
//!
//! The actor exits its loop once every [`StoreClient`] clone has been dropped.
//! Await the task's `JoinHandle` to observe a clean shutdown.
//!
//! ## Testing
//!
//! The [`mock`] module offers [`MockStore`](mock::MockStore), which answers
//! requests from a queue of expectations instead of a real map. It is the
//! easiest way to inject store failures into code built on a [`StoreClient`].

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::Record;
