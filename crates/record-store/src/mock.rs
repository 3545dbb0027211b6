//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`], but the requests are
//! answered from a queue of expectations instead of a `HashMap`. Code built
//! on a store client (lookup services, for instance) can be tested against
//! exact responses, including failures that a real actor never produces.
//!
//! ## When to use Mocks vs a Real Store
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | None (scripted responses) | Real map |
//! | **Error Injection** | Easy (`return_err`) | Only by shutting the actor down |
//! | **Use Case** | Testing logic *around* the client | Testing the store or the full system |
//!
//! ## Example
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{Record, StoreError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Product { id: u32, title: String }
//!
//! impl Record for Product {
//!     type Key = u32;
//!     fn key(&self) -> u32 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Product>::new();
//!     mock.expect_get(200)
//!         .return_ok(Some(Product { id: 200, title: "Widget".into() }));
//!     mock.expect_get(201)
//!         .return_err(StoreError::Backend("disk on fire".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(200).await.unwrap().unwrap().title, "Widget");
//!     assert!(client.get(201).await.is_err());
//!
//!     mock.verify();
//!     assert_eq!(mock.calls(), 2);
//! }
//! ```
//!
//! ## Low-level Helpers
//!
//! [`create_mock_client`] returns a client plus the raw request receiver, and
//! [`expect_get`] / [`expect_insert`] pull the next request off it. Use them
//! when a test needs to hold a response back (e.g. to simulate a slow store).

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: Record> {
    Get {
        key: T::Key,
        response: Result<Option<T>, StoreError>,
    },
    Insert {
        response: Result<Option<T>, StoreError>,
    },
    Remove {
        key: T::Key,
        response: Result<Option<T>, StoreError>,
    },
}

struct MockState<T: Record> {
    expectations: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

/// A scripted stand-in for a store actor.
///
/// Requests are matched against expectations in FIFO order. A request that
/// does not match the next expectation (wrong kind or wrong key) is answered
/// with [`StoreError::Backend`] and reported by [`MockStore::verify`].
pub struct MockStore<T: Record> {
    client: StoreClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    calls: Arc<AtomicUsize>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a mock store with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let calls = Arc::new(AtomicUsize::new(0));

        let task_state = state.clone();
        let task_calls = calls.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                task_calls.fetch_add(1, Ordering::SeqCst);
                let mut state = match task_state.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Remove { key, respond_to },
                        Some(Expectation::Remove {
                            key: expected,
                            response,
                        }),
                    ) if key == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        let description = format!("{request:?}");
                        state.mismatches.push(description.clone());
                        reject(request, description);
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            state,
            calls,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Number of requests the mock has received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Expects a `get` for `key`.
    pub fn expect_get(&mut self, key: T::Key) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: Kind::Get(key),
            state: self.state.clone(),
        }
    }

    /// Expects an `insert` of any record.
    pub fn expect_insert(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: Kind::Insert,
            state: self.state.clone(),
        }
    }

    /// Expects a `remove` of `key`.
    pub fn expect_remove(&mut self, key: T::Key) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: Kind::Remove(key),
            state: self.state.clone(),
        }
    }

    /// Panics if an expectation is still pending or a request did not match.
    pub fn verify(&self) {
        let state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !state.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

fn reject<T: Record>(request: StoreRequest<T>, description: String) {
    let error = StoreError::Backend(format!("unexpected request: {description}"));
    match request {
        StoreRequest::Insert { respond_to, .. }
        | StoreRequest::Get { respond_to, .. }
        | StoreRequest::Remove { respond_to, .. } => {
            let _ = respond_to.send(Err(error));
        }
        StoreRequest::Len { respond_to } => {
            let _ = respond_to.send(Err(error));
        }
    }
}

enum Kind<K> {
    Get(K),
    Insert,
    Remove(K),
}

/// Builder returned by the `expect_*` methods of [`MockStore`].
pub struct ExpectationBuilder<T: Record> {
    kind: Kind<T::Key>,
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: Record> ExpectationBuilder<T> {
    /// Answers the request with `Ok(value)`.
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    /// Answers the request with `Err(error)`.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        let expectation = match self.kind {
            Kind::Get(key) => Expectation::Get { key, response },
            Kind::Insert => Expectation::Insert { response },
            Kind::Remove(key) => Expectation::Remove { key, response },
        };
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.expectations.push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test pulls them off the receiver,
/// which lets a test decide exactly when (and whether) a lookup completes.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Returns the next request if it is a `Get`.
pub async fn expect_get<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Key, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an `Insert`.
pub async fn expect_insert<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}
