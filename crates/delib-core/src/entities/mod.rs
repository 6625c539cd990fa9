//! Entity structs for reconstructed deliberation history.
//!
//! All entities are derived values: built fresh from the fact store on every
//! query and never persisted by this workspace. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod chain;
mod step;
mod summary;
mod vote;

pub use chain::ProvenanceChain;
pub use step::{ProvenanceStep, StepKey};
pub use summary::ChainSummary;
pub use vote::{IndividualVote, VoteRecord, parse_count};
