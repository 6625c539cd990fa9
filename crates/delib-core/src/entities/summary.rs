use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the cross-provision ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChainSummary {
    pub provision_uri: String,
    pub provision_label: String,
    /// Number of events discovered for the provision, before de-duplication.
    pub step_count: usize,
}
