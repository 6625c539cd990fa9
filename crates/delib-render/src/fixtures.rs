//! Hand-built chains for renderer tests.

use chrono::{TimeDelta, TimeZone, Utc};

use delib_core::entities::{ProvenanceChain, ProvenanceStep, VoteRecord};
use delib_core::enums::{EventType, LifecycleState};

fn step(
    meeting: u32,
    day: (u32, u32),
    event_type: EventType,
    description: &str,
    states: (LifecycleState, LifecycleState),
) -> ProvenanceStep {
    let mut step = ProvenanceStep::new(
        format!("reg:meeting{meeting}"),
        format!("Meeting {meeting}"),
        event_type,
        description,
        Utc.with_ymd_and_hms(2024, day.0, day.1, 0, 0, 0)
            .single()
            .map(|ts| ts.fixed_offset()),
    );
    step.from_state = states.0;
    step.to_state = states.1;
    step
}

/// Proposed at M1 by Germany, amended at M2 by France, adopted at M3 24-3-1.
pub(crate) fn article5_chain() -> ProvenanceChain {
    let mut proposal = step(
        1,
        (1, 15),
        EventType::Proposal,
        "Initial proposal submitted",
        (LifecycleState::None, LifecycleState::Proposed),
    );
    proposal.actor = Some("reg:delegate_de".into());
    proposal.actor_name = Some("Germany".into());

    let mut amendment = step(
        2,
        (2, 20),
        EventType::Amendment,
        "Amendment: Member states shall notify within 30 days.",
        (LifecycleState::Proposed, LifecycleState::Amended),
    );
    amendment.actor = Some("reg:delegate_fr".into());
    amendment.actor_name = Some("France".into());
    amendment.related_uris = vec!["reg:article5_v2".into()];

    let mut adoption = step(
        3,
        (3, 10),
        EventType::Adoption,
        "Adopted (24-3-1)",
        (LifecycleState::Amended, LifecycleState::Adopted),
    );
    adoption.related_uris = vec!["reg:article5_v2".into()];
    adoption.vote_record = Some(VoteRecord {
        uri: "reg:vote1".into(),
        result: Some("adopted".into()),
        for_count: 24,
        against_count: 3,
        abstain_count: 1,
        ..VoteRecord::default()
    });

    ProvenanceChain {
        final_decision: Some("reg:decision1".into()),
        provision_uri: Some("reg:article5".into()),
        provision_label: Some("Article 5".into()),
        origin_meeting: Some("reg:meeting1".into()),
        origin_meeting_label: Some("Meeting 1".into()),
        adoption_meeting: Some("reg:meeting3".into()),
        adoption_meeting_label: Some("Meeting 3".into()),
        steps: vec![proposal, amendment, adoption],
        total_duration: TimeDelta::days(55),
        meeting_count: 3,
        amendment_count: 1,
        vote_count: 0,
        current_state: LifecycleState::Adopted,
    }
}
