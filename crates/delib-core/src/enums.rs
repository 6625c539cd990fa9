//! Event types, lifecycle states, decision types, and vote positions.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Raw strings read from the fact store are mapped to these enums exactly once,
//! through the label tables in this module, so discovery code never compares
//! raw strings itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Kind of occurrence recorded in a provenance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Proposal,
    Discussion,
    Amendment,
    Vote,
    Deferral,
    Adoption,
    Rejection,
    Withdrawal,
    Unknown,
}

/// Accepted raw labels for each event type. Matching is ASCII case-insensitive.
const EVENT_LABELS: &[(&str, EventType)] = &[
    ("proposal", EventType::Proposal),
    ("proposed", EventType::Proposal),
    ("discussion", EventType::Discussion),
    ("discussed", EventType::Discussion),
    ("amendment", EventType::Amendment),
    ("amended", EventType::Amendment),
    ("vote", EventType::Vote),
    ("voted", EventType::Vote),
    ("deferral", EventType::Deferral),
    ("deferred", EventType::Deferral),
    ("adoption", EventType::Adoption),
    ("adopted", EventType::Adoption),
    ("rejection", EventType::Rejection),
    ("rejected", EventType::Rejection),
    ("withdrawal", EventType::Withdrawal),
    ("withdrawn", EventType::Withdrawal),
];

impl EventType {
    /// Every known event type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Proposal,
        Self::Discussion,
        Self::Amendment,
        Self::Vote,
        Self::Deferral,
        Self::Adoption,
        Self::Rejection,
        Self::Withdrawal,
        Self::Unknown,
    ];

    /// Map a raw label (noun or past participle) to an event type.
    ///
    /// Unrecognized labels map to [`EventType::Unknown`].
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        let raw = raw.trim();
        EVENT_LABELS
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(raw))
            .map_or(Self::Unknown, |(_, event)| *event)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposal => "proposal",
            Self::Discussion => "discussion",
            Self::Amendment => "amendment",
            Self::Vote => "vote",
            Self::Deferral => "deferral",
            Self::Adoption => "adoption",
            Self::Rejection => "rejection",
            Self::Withdrawal => "withdrawal",
            Self::Unknown => "unknown",
        }
    }

    /// Upper-case heading used by the text renderers (`"PROPOSAL"`).
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Proposal => "PROPOSAL",
            Self::Discussion => "DISCUSSION",
            Self::Amendment => "AMENDMENT",
            Self::Vote => "VOTE",
            Self::Deferral => "DEFERRAL",
            Self::Adoption => "ADOPTION",
            Self::Rejection => "REJECTION",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LifecycleState
// ---------------------------------------------------------------------------

/// Lifecycle state of a provision as reconstructed from its history.
///
/// ```text
/// none → proposed → under_discussion → amended → voted → adopted
///                                             → deferred → rejected
///                                                        → withdrawn
/// ```
///
/// `adopted`, `rejected` and `withdrawn` are practical terminals, but facts are
/// trusted as given, so [`LifecycleState::apply`] never refuses an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    #[default]
    None,
    Proposed,
    UnderDiscussion,
    Amended,
    Voted,
    Deferred,
    Adopted,
    Rejected,
    Withdrawn,
}

impl LifecycleState {
    /// State reached by applying `event` in this state.
    ///
    /// A discussion only moves a provision that is unproposed or freshly
    /// proposed; every other discussion, and any unknown event, leaves the
    /// state unchanged.
    #[must_use]
    pub const fn apply(self, event: EventType) -> Self {
        match event {
            EventType::Proposal => Self::Proposed,
            EventType::Discussion => match self {
                Self::None | Self::Proposed => Self::UnderDiscussion,
                other => other,
            },
            EventType::Amendment => Self::Amended,
            EventType::Vote => Self::Voted,
            EventType::Deferral => Self::Deferred,
            EventType::Adoption => Self::Adopted,
            EventType::Rejection => Self::Rejected,
            EventType::Withdrawal => Self::Withdrawn,
            EventType::Unknown => self,
        }
    }

    /// Whether this state normally ends a provision's history.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Adopted | Self::Rejected | Self::Withdrawn)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Proposed => "proposed",
            Self::UnderDiscussion => "under_discussion",
            Self::Amended => "amended",
            Self::Voted => "voted",
            Self::Deferred => "deferred",
            Self::Adopted => "adopted",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DecisionType
// ---------------------------------------------------------------------------

/// Classification carried by a decision's `decision-type` fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    Adoption,
    Rejection,
    Deferral,
    Amendment,
    Unrecognized,
}

/// Accepted raw decision-type strings. Matching is exact.
const DECISION_LABELS: &[(&str, DecisionType)] = &[
    ("adoption", DecisionType::Adoption),
    ("adopted", DecisionType::Adoption),
    ("rejection", DecisionType::Rejection),
    ("rejected", DecisionType::Rejection),
    ("deferral", DecisionType::Deferral),
    ("deferred", DecisionType::Deferral),
    ("amendment", DecisionType::Amendment),
    ("amended", DecisionType::Amendment),
];

impl DecisionType {
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        DECISION_LABELS
            .iter()
            .find(|(label, _)| *label == raw)
            .map_or(Self::Unrecognized, |(_, kind)| *kind)
    }

    /// Event produced by a decision of this type affecting a provision.
    ///
    /// Unrecognized decisions are treated as adoptions.
    #[must_use]
    pub const fn event_type(self) -> EventType {
        match self {
            Self::Adoption | Self::Unrecognized => EventType::Adoption,
            Self::Rejection => EventType::Rejection,
            Self::Deferral => EventType::Deferral,
            Self::Amendment => EventType::Amendment,
        }
    }

    /// Default step description when the decision has no title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Adoption => "Decision: adoption",
            Self::Rejection => "Decision: rejection",
            Self::Deferral => "Decision: deferred",
            Self::Amendment => "Decision: amendment",
            Self::Unrecognized => "Decision made",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adoption => "adoption",
            Self::Rejection => "rejection",
            Self::Deferral => "deferral",
            Self::Amendment => "amendment",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VotePosition
// ---------------------------------------------------------------------------

/// How a single voter voted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VotePosition {
    For,
    Against,
    Abstain,
    Absent,
}

impl VotePosition {
    /// Map a raw position label; `None` when the label is not recognized.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "for" | "yes" | "in_favor" => Some(Self::For),
            "against" | "no" => Some(Self::Against),
            "abstain" | "abstention" => Some(Self::Abstain),
            "absent" | "not_voting" => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::For => "for",
            Self::Against => "against",
            Self::Abstain => "abstain",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for VotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
