//! # Store Messages
//!
//! This module defines the request type exchanged between a
//! [`StoreClient`](crate::StoreClient) and its [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every variant carries its own typed responder, so the caller always gets
/// back exactly the type it asked for. A `Get` for an offer store can only
/// ever yield an `Option<Offer>`.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    /// Insert or replace; responds with the previous record under that key.
    Insert {
        record: T,
        respond_to: Response<Option<T>>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    Remove {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    Len { respond_to: Response<usize> },
}
