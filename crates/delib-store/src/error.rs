//! Fact store error types.

use thiserror::Error;

/// Errors from fact store mutations. Queries never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A triple component was empty; empty strings are reserved as wildcards.
    #[error("Triple {position} cannot be empty")]
    EmptyComponent { position: &'static str },
}
