use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VotePosition;
use crate::time::Timestamp;

/// Tally of a vote taken on a version or motion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VoteRecord {
    pub uri: String,
    pub vote_date: Option<Timestamp>,
    /// e.g. `"roll_call"`, `"voice"`, `"show_of_hands"`.
    pub vote_type: Option<String>,
    pub question: Option<String>,
    /// e.g. `"adopted"`, `"rejected"`, `"tie"`.
    pub result: Option<String>,
    pub majority_required: Option<String>,
    pub for_count: u32,
    pub against_count: u32,
    pub abstain_count: u32,
    pub absent_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub individual_votes: Vec<IndividualVote>,
}

impl VoteRecord {
    /// `for-against-abstain`, e.g. `"24-3-1"`.
    #[must_use]
    pub fn tally(&self) -> String {
        format!(
            "{}-{}-{}",
            self.for_count, self.against_count, self.abstain_count
        )
    }

    /// Total number of ballots accounted for, absentees included.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.for_count
            .saturating_add(self.against_count)
            .saturating_add(self.abstain_count)
            .saturating_add(self.absent_count)
    }
}

/// How one stakeholder voted in a roll call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IndividualVote {
    pub voter_uri: String,
    pub voter_name: String,
    pub position: VotePosition,
    pub explanation: Option<String>,
}

/// Parse a vote count leniently: digits are read in order, anything else is
/// skipped, and a value without digits counts as zero. Saturates at `u32::MAX`.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit))
}
