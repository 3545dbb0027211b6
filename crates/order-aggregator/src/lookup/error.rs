//! Error type shared by the three lookup services.

use record_store::StoreError;
use thiserror::Error;

/// Errors a lookup service can report.
///
/// The aggregator treats both variants the same way in its result, but logs
/// them differently: a missing record is expected data, an unavailable
/// service is an incident.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The service answered, but holds no record for the key.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service could not answer (closed, crashed, backend fault).
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl LookupError {
    pub fn not_found(key: impl std::fmt::Display) -> Self {
        LookupError::NotFound(key.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

impl From<StoreError> for LookupError {
    fn from(e: StoreError) -> Self {
        LookupError::Unavailable(e.to_string())
    }
}
