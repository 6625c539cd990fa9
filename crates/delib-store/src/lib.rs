//! # delib-store
//!
//! Fact store interface for deliberation data.
//!
//! Provenance reconstruction consumes a collection of (subject, predicate,
//! object) triples through the [`FactStore`] trait. The extraction layer that
//! populates the store lives elsewhere; this crate only fixes the contract and
//! ships [`MemoryStore`], an indexed in-memory implementation used by tests and
//! embedders that have no store of their own.
//!
//! # Consistency
//!
//! A chain build issues many point queries. Implementations must present a
//! consistent read view for the duration of one build, either by blocking
//! writers or by handing out a snapshot (see [`MemoryStore::snapshot`]).

pub mod error;
mod memory;
mod triple;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use triple::{Triple, TriplePattern};

/// Pattern-matching access to a triple collection.
///
/// An empty string in any position of [`find`](FactStore::find) or
/// [`delete`](FactStore::delete) is a wildcard. Results come back in a stable
/// order so "first matching fact" probes are deterministic.
pub trait FactStore: Send + Sync {
    /// All triples matching the pattern.
    fn find(&self, subject: &str, predicate: &str, object: &str) -> Vec<Triple>;

    /// Insert a triple. Adding an existing triple is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyComponent` if any component is empty.
    fn add(&self, subject: &str, predicate: &str, object: &str) -> Result<(), StoreError>;

    /// Remove every triple matching the pattern, returning how many were removed.
    fn delete(&self, subject: &str, predicate: &str, object: &str) -> usize;

    /// Object of the first `(subject, predicate, _)` triple.
    fn first_object(&self, subject: &str, predicate: &str) -> Option<String> {
        self.find(subject, predicate, "")
            .into_iter()
            .next()
            .map(|t| t.object)
    }

    /// Objects of every `(subject, predicate, _)` triple, in store order.
    fn objects(&self, subject: &str, predicate: &str) -> Vec<String> {
        self.find(subject, predicate, "")
            .into_iter()
            .map(|t| t.object)
            .collect()
    }

    /// Subjects of every `(_, predicate, object)` triple, in store order.
    fn subjects(&self, predicate: &str, object: &str) -> Vec<String> {
        self.find("", predicate, object)
            .into_iter()
            .map(|t| t.subject)
            .collect()
    }

    /// Query with a [`TriplePattern`].
    fn find_pattern(&self, pattern: &TriplePattern) -> Vec<Triple> {
        self.find(
            pattern.subject.as_deref().unwrap_or_default(),
            pattern.predicate.as_deref().unwrap_or_default(),
            pattern.object.as_deref().unwrap_or_default(),
        )
    }
}
