//! Pieces shared by the tree-shaped renderers.

use delib_core::entities::{ProvenanceChain, ProvenanceStep, VoteRecord};
use delib_core::labels::uri_label;

pub(crate) const EMPTY_MESSAGE: &str = "No provenance steps found.";

/// `"Provenance Chain: <label>"`, or just `"Provenance Chain"` when unlabelled.
pub(crate) fn title(chain: &ProvenanceChain) -> String {
    match chain.provision_label.as_deref() {
        Some(label) if !label.is_empty() => format!("Provenance Chain: {label}"),
        _ => "Provenance Chain".to_string(),
    }
}

/// A meeting and its steps, in chain order.
pub(crate) struct MeetingGroup<'a> {
    pub(crate) label: String,
    pub(crate) date: Option<String>,
    pub(crate) steps: Vec<&'a ProvenanceStep>,
}

/// Steps grouped by meeting. The heading date is the first step's date.
pub(crate) fn meeting_groups(chain: &ProvenanceChain) -> Vec<MeetingGroup<'_>> {
    chain
        .steps_by_meeting()
        .into_iter()
        .filter_map(|(meeting_uri, steps)| {
            let first = steps.first()?;
            let label = if first.meeting_label.is_empty() {
                uri_label(meeting_uri, "")
            } else {
                first.meeting_label.clone()
            };
            let date = first.date_label();
            Some(MeetingGroup { label, date, steps })
        })
        .collect()
}

pub(crate) fn state_line(step: &ProvenanceStep) -> String {
    format!("State: {} → {}", step.from_state, step.to_state)
}

pub(crate) fn vote_line(vote: &VoteRecord) -> String {
    format!(
        "Vote: {} for, {} against, {} abstain",
        vote.for_count, vote.against_count, vote.abstain_count
    )
}
