//! # Store Errors
//!
//! Errors raised by the store plumbing itself. A missing record is not an
//! error at this layer: `get` returns `Ok(None)` and callers decide what
//! absence means for them.

/// Errors that can occur while talking to a store actor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    /// Injected by [`MockStore`](crate::mock::MockStore) to simulate a backend fault.
    #[error("Store backend failure: {0}")]
    Backend(String),
}
