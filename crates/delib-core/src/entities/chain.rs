use chrono::TimeDelta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::duration_serde;
use crate::entities::ProvenanceStep;
use crate::enums::LifecycleState;

/// The assembled history of one provision or decision.
///
/// `steps` is ordered non-decreasing by timestamp (undated steps first) and
/// holds at most one step per (meeting, event type, calendar date). The
/// remaining fields are statistics derived from `steps`; on an empty chain
/// they keep their zero values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProvenanceChain {
    /// The decision the chain was built for, or the adopting decision found
    /// for a provision.
    pub final_decision: Option<String>,
    pub provision_uri: Option<String>,
    pub provision_label: Option<String>,
    /// Meeting of the first step.
    pub origin_meeting: Option<String>,
    pub origin_meeting_label: Option<String>,
    /// Meeting of the last step, only when that step is an adoption.
    pub adoption_meeting: Option<String>,
    pub adoption_meeting_label: Option<String>,
    pub steps: Vec<ProvenanceStep>,
    /// Time from the first to the last dated step, in seconds on the wire.
    #[serde(with = "duration_serde::seconds")]
    #[schemars(with = "i64")]
    pub total_duration: TimeDelta,
    pub meeting_count: usize,
    pub amendment_count: usize,
    pub vote_count: usize,
    pub current_state: LifecycleState,
}

impl Default for ProvenanceChain {
    fn default() -> Self {
        Self {
            final_decision: None,
            provision_uri: None,
            provision_label: None,
            origin_meeting: None,
            origin_meeting_label: None,
            adoption_meeting: None,
            adoption_meeting_label: None,
            steps: Vec::new(),
            total_duration: TimeDelta::zero(),
            meeting_count: 0,
            amendment_count: 0,
            vote_count: 0,
            current_state: LifecycleState::None,
        }
    }
}

impl ProvenanceChain {
    /// An empty chain rooted at a provision.
    #[must_use]
    pub fn for_provision(
        provision_uri: impl Into<String>,
        provision_label: impl Into<String>,
    ) -> Self {
        Self {
            provision_uri: Some(provision_uri.into()),
            provision_label: Some(provision_label.into()),
            ..Self::default()
        }
    }

    /// An empty chain rooted at a decision; the provision is filled in later.
    #[must_use]
    pub fn for_decision(decision_uri: impl Into<String>) -> Self {
        Self {
            final_decision: Some(decision_uri.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn first_step(&self) -> Option<&ProvenanceStep> {
        self.steps.first()
    }

    #[must_use]
    pub fn last_step(&self) -> Option<&ProvenanceStep> {
        self.steps.last()
    }

    /// Steps grouped by meeting, groups ordered by each meeting's first appearance.
    #[must_use]
    pub fn steps_by_meeting(&self) -> Vec<(&str, Vec<&ProvenanceStep>)> {
        let mut groups: Vec<(&str, Vec<&ProvenanceStep>)> = Vec::new();
        for step in &self.steps {
            match groups
                .iter()
                .position(|(meeting, _)| *meeting == step.meeting_uri)
            {
                Some(idx) => groups[idx].1.push(step),
                None => groups.push((step.meeting_uri.as_str(), vec![step])),
            }
        }
        groups
    }
}
