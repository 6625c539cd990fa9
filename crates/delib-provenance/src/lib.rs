//! # delib-provenance
//!
//! Reconstructs how a provision or decision evolved across a deliberation.
//!
//! A [`ProvenanceBuilder`] reads a [`FactStore`](delib_store::FactStore) and
//! produces a [`ProvenanceChain`](delib_core::entities::ProvenanceChain):
//!
//! 1. **Discovery** probes the store for proposals, discussions, version
//!    amendments and outcomes, affecting decisions and deferrals.
//! 2. **Correlation** adds the decision's own step and any motions behind it
//!    when the entry point is a decision.
//! 3. **Assembly** sorts steps by date, drops same-day repeats of an event at
//!    a meeting, and walks the lifecycle state machine.
//! 4. **Statistics** derive origin and adoption meetings, duration and counts.
//!
//! [`ProvenanceBuilder::query_longest_chains`] ranks every known provision by
//! the number of events discovered for it.
//!
//! The store is only read. It must present a consistent view for the duration
//! of one call; take a snapshot first if writers may run concurrently.

mod assemble;
mod builder;
mod correlate;
mod discovery;
mod lookup;
mod ranking;
mod stats;

pub use assemble::assemble;
pub use builder::{DEFAULT_EXCERPT_CHARS, DEFAULT_RANKING_LIMIT, ProvenanceBuilder};
pub use stats::annotate;
