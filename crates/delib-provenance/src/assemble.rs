//! Chain assembly: chronological order, de-duplication, state walk.

use std::collections::HashSet;

use delib_core::entities::ProvenanceStep;
use delib_core::enums::LifecycleState;

/// Normalize discovered steps into chain order.
///
/// 1. Stable sort by timestamp; undated steps come first and ties keep
///    discovery order.
/// 2. Keep the first step per (meeting, event type, calendar date).
/// 3. Walk the result from `none`, setting each step's `from_state` and
///    `to_state` through [`LifecycleState::apply`].
#[must_use]
pub fn assemble(mut steps: Vec<ProvenanceStep>) -> Vec<ProvenanceStep> {
    steps.sort_by_key(|step| step.timestamp);

    let mut seen = HashSet::with_capacity(steps.len());
    steps.retain(|step| seen.insert(step.dedup_key()));

    let mut state = LifecycleState::None;
    for step in &mut steps {
        step.from_state = state;
        step.to_state = state.apply(step.event_type);
        state = step.to_state;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use delib_core::enums::EventType;
    use delib_core::time::parse_timestamp;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn step(meeting: &str, event: EventType, date: &str, description: &str) -> ProvenanceStep {
        ProvenanceStep::new(meeting, meeting, event, description, parse_timestamp(date))
    }

    fn states(events: &[EventType]) -> Vec<LifecycleState> {
        let steps = events
            .iter()
            .enumerate()
            .map(|(i, event)| step(&format!("reg:m{i}"), *event, "2024-01-15", ""))
            .collect();
        assemble(steps).iter().map(|s| s.to_state).collect()
    }

    #[test]
    fn sorts_chronologically_with_undated_first() {
        let steps = assemble(vec![
            step("reg:m3", EventType::Adoption, "2024-03-10", ""),
            step("reg:m1", EventType::Proposal, "2024-01-15", ""),
            step("reg:m0", EventType::Discussion, "sometime", ""),
        ]);
        let meetings: Vec<&str> = steps.iter().map(|s| s.meeting_uri.as_str()).collect();
        assert_eq!(meetings, vec!["reg:m0", "reg:m1", "reg:m3"]);
    }

    #[test]
    fn equal_timestamps_keep_discovery_order() {
        let steps = assemble(vec![
            step("reg:m1", EventType::Discussion, "2024-01-15", "first"),
            step("reg:m1", EventType::Proposal, "2024-01-15", "second"),
        ]);
        assert_eq!(steps[0].description, "first");
        assert_eq!(steps[1].description, "second");
        assert_eq!(steps[1].from_state, LifecycleState::UnderDiscussion);
    }

    #[test]
    fn keeps_first_of_same_meeting_event_and_day() {
        let steps = assemble(vec![
            step("reg:m1", EventType::Discussion, "2024-01-15T09:00:00Z", "morning"),
            step("reg:m1", EventType::Discussion, "2024-01-15T16:00:00Z", "afternoon"),
            step("reg:m1", EventType::Discussion, "2024-01-16", "next day"),
        ]);
        let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["morning", "next day"]);
    }

    #[test]
    fn undated_duplicates_collapse() {
        let steps = assemble(vec![
            step("reg:m1", EventType::Deferral, "", "a"),
            step("reg:m1", EventType::Deferral, "bogus", "b"),
        ]);
        assert_eq!(steps.len(), 1);
    }

    #[rstest]
    #[case(&[EventType::Proposal, EventType::Discussion], &[LifecycleState::Proposed, LifecycleState::UnderDiscussion])]
    #[case(&[EventType::Discussion], &[LifecycleState::UnderDiscussion])]
    #[case(&[EventType::Amendment, EventType::Discussion], &[LifecycleState::Amended, LifecycleState::Amended])]
    #[case(&[EventType::Vote, EventType::Unknown, EventType::Adoption], &[LifecycleState::Voted, LifecycleState::Voted, LifecycleState::Adopted])]
    #[case(&[EventType::Adoption, EventType::Amendment], &[LifecycleState::Adopted, LifecycleState::Amended])]
    #[case(&[EventType::Deferral, EventType::Withdrawal, EventType::Proposal], &[LifecycleState::Deferred, LifecycleState::Withdrawn, LifecycleState::Proposed])]
    #[case(&[EventType::Unknown], &[LifecycleState::None])]
    fn state_walk(#[case] events: &[EventType], #[case] expected: &[LifecycleState]) {
        assert_eq!(states(events), expected);
    }

    #[test]
    fn state_walk_is_deterministic() {
        let events = [
            EventType::Proposal,
            EventType::Discussion,
            EventType::Amendment,
            EventType::Rejection,
        ];
        assert_eq!(states(&events), states(&events));
    }

    #[test]
    fn from_state_chains_previous_to_state() {
        let steps = assemble(vec![
            step("reg:m1", EventType::Proposal, "2024-01-15", ""),
            step("reg:m2", EventType::Amendment, "2024-02-20", ""),
        ]);
        assert_eq!(steps[0].from_state, LifecycleState::None);
        assert_eq!(steps[1].from_state, steps[0].to_state);
    }
}
