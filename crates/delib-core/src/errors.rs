//! Cross-cutting error types for deliberation provenance.
//!
//! This module defines errors that any public provenance operation can return.
//! Storage, rendering and configuration errors are defined in their respective
//! crates.
//!
//! "Not found" is deliberately absent: a provision or decision without any
//! discoverable events yields an empty chain rather than an error.

use thiserror::Error;

/// Errors that can be raised by provenance operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The engine was constructed without a fact store.
    #[error("Fact store is not available")]
    NilStore,

    /// A required reference argument was empty.
    #[error("Invalid argument: {field} is required")]
    InvalidArgument { field: String },
}

impl CoreError {
    /// Build an [`CoreError::InvalidArgument`] for the named field.
    #[must_use]
    pub fn invalid_argument(field: &str) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
        }
    }
}
