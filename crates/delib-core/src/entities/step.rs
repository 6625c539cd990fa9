use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::VoteRecord;
use crate::enums::{EventType, LifecycleState};
use crate::time::{Timestamp, calendar_date};

/// One reconstructed occurrence in a provision's history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProvenanceStep {
    /// When the step happened; `None` when the meeting date was missing or unparsable.
    pub timestamp: Option<Timestamp>,
    pub meeting_uri: String,
    pub meeting_label: String,
    pub event_type: EventType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_name: Option<String>,
    pub from_state: LifecycleState,
    pub to_state: LifecycleState,
    /// Entities that produced this step (versions, decisions, motions).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_uris: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_record: Option<VoteRecord>,
}

/// Identity of a step for de-duplication: same meeting, same event, same day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepKey {
    pub meeting_uri: String,
    pub event_type: EventType,
    pub date: Option<NaiveDate>,
}

impl ProvenanceStep {
    /// A step with no actor, relations or vote, in the initial lifecycle state.
    #[must_use]
    pub fn new(
        meeting_uri: impl Into<String>,
        meeting_label: impl Into<String>,
        event_type: EventType,
        description: impl Into<String>,
        timestamp: Option<Timestamp>,
    ) -> Self {
        Self {
            timestamp,
            meeting_uri: meeting_uri.into(),
            meeting_label: meeting_label.into(),
            event_type,
            description: description.into(),
            actor: None,
            actor_name: None,
            from_state: LifecycleState::None,
            to_state: LifecycleState::None,
            related_uris: Vec::new(),
            vote_record: None,
        }
    }

    #[must_use]
    pub fn dedup_key(&self) -> StepKey {
        StepKey {
            meeting_uri: self.meeting_uri.clone(),
            event_type: self.event_type,
            date: calendar_date(self.timestamp),
        }
    }

    /// Calendar date in the meeting's own offset, formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_label(&self) -> Option<String> {
        calendar_date(self.timestamp).map(|date| date.format("%Y-%m-%d").to_string())
    }
}
