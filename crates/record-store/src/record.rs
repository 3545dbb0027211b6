//! # Record Trait
//!
//! The `Record` trait is the contract a value must satisfy to be kept in a
//! [`StoreActor`](crate::StoreActor). It names the key type and tells the store
//! how to derive the key from a record, so inserts never need a separate id.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value that can be stored and looked up by key.
///
/// The key is derived from the record itself. Two records with the same key
/// are the same logical record: inserting the second replaces the first.
///
/// Orders are keyed by the seller they belong to, offers and products by
/// their own id. The store does not care which, as long as the key is
/// hashable and printable for logging.
pub trait Record: Clone + Send + Sync + Debug + 'static {
    /// The lookup key (e.g. a `u32` newtype).
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Returns the key this record is stored under.
    fn key(&self) -> Self::Key;
}
