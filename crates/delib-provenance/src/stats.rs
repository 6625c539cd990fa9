//! Aggregate statistics derived from an assembled chain.

use std::collections::HashSet;

use chrono::TimeDelta;

use delib_core::entities::ProvenanceChain;
use delib_core::enums::EventType;

/// Fill a chain's derived fields from its assembled steps.
///
/// An empty chain is left untouched. Embedded vote records on adoption or
/// rejection steps do not count toward `vote_count`; only standalone vote
/// steps do.
pub fn annotate(chain: &mut ProvenanceChain) {
    let (Some(first), Some(last)) = (chain.steps.first(), chain.steps.last()) else {
        return;
    };

    chain.origin_meeting = Some(first.meeting_uri.clone());
    chain.origin_meeting_label = Some(first.meeting_label.clone());

    if last.event_type == EventType::Adoption {
        chain.adoption_meeting = Some(last.meeting_uri.clone());
        chain.adoption_meeting_label = Some(last.meeting_label.clone());
    }

    chain.total_duration = match (first.timestamp, last.timestamp) {
        (Some(start), Some(end)) => end - start,
        _ => TimeDelta::zero(),
    };
    chain.current_state = last.to_state;

    chain.meeting_count = chain
        .steps
        .iter()
        .map(|step| step.meeting_uri.as_str())
        .filter(|meeting| !meeting.is_empty())
        .collect::<HashSet<_>>()
        .len();
    chain.amendment_count = count_of(chain, EventType::Amendment);
    chain.vote_count = count_of(chain, EventType::Vote);
}

fn count_of(chain: &ProvenanceChain, event_type: EventType) -> usize {
    chain
        .steps
        .iter()
        .filter(|step| step.event_type == event_type)
        .count()
}
