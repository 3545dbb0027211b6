//! # System Lifecycle
//!
//! Starting, wiring and stopping the in-memory services and the aggregator.
//!
//! ## Startup
//!
//! [`AggregatorSystem::new`] creates one store actor per record type, spawns
//! them, wraps their clients in the lookup services and hands those to an
//! [`AggregatorService`](crate::aggregator::AggregatorService). The stores have
//! no dependencies on each other, so there is no ordering to get right.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every store channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - each actor logs its final size and exits
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`](self::tracing) module.

pub mod aggregator_system;
pub mod tracing;

pub use self::aggregator_system::*;
pub use self::tracing::*;
