//! # Store Actor
//!
//! This module defines the `StoreActor`, the server half of a record store.
//! It owns the map of records and processes requests sequentially, which
//! gives every operation exclusive access to the map without locking.

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor that owns a keyed collection of records.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Share**: Clone the client into every service that needs the records.
///
/// ```rust
/// use record_store::{Record, StoreActor};
///
/// #[derive(Clone, Debug)]
/// struct Product { id: u32, title: String }
///
/// impl Record for Product {
///     type Key = u32;
///     fn key(&self) -> u32 { self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Product>::new(10);
///     let handle = tokio::spawn(actor.run());
///
///     client.insert(Product { id: 200, title: "Widget".into() }).await.unwrap();
///     assert_eq!(client.len().await.unwrap(), 1);
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
///
/// # Operations
///
/// * **Insert**: stores the record under `record.key()`, returning the record it replaced.
/// * **Get**: returns a clone of the record, or `None`.
/// * **Remove**: removes and returns the record, or `None`.
/// * **Len**: returns the number of stored records.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Key, T>,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Creates an actor pre-populated with `records`.
    pub fn with_records(
        buffer_size: usize,
        records: impl IntoIterator<Item = T>,
    ) -> (Self, StoreClient<T>) {
        let (mut actor, client) = Self::new(buffer_size);
        actor
            .records
            .extend(records.into_iter().map(|r| (r.key(), r)));
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Offer" instead of "order_aggregator::model::offer::Offer"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, size = self.records.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { record, respond_to } => {
                    let key = record.key();
                    debug!(record_type, %key, ?record, "Insert");
                    let previous = self.records.insert(key.clone(), record);
                    info!(
                        record_type,
                        %key,
                        replaced = previous.is_some(),
                        size = self.records.len(),
                        "Inserted"
                    );
                    let _ = respond_to.send(Ok(previous));
                }
                StoreRequest::Get { key, respond_to } => {
                    let record = self.records.get(&key).cloned();
                    debug!(record_type, %key, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Remove { key, respond_to } => {
                    let removed = self.records.remove(&key);
                    debug!(record_type, %key, found = removed.is_some(), "Remove");
                    let _ = respond_to.send(Ok(removed));
                }
                StoreRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.records.len()));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}
