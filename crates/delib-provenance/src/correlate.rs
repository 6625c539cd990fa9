//! Decision correlation: the decision's own step, preceding motions, and the
//! adopting decision of a provision.

use tracing::trace;

use delib_core::entities::ProvenanceStep;
use delib_core::enums::{DecisionType, EventType};
use delib_core::vocab::{
    PROP_AFFECTS_PROVISION, PROP_BASED_ON_MOTION, PROP_DECIDED_AT, PROP_DECISION_TYPE,
    PROP_PROPOSED_AT, PROP_TITLE,
};

use crate::lookup::Reader;

/// Event type of a decision's own step.
///
/// An absent type counts as an adoption. A present but unrecognized type is
/// read permissively and falls back to a discussion.
fn decision_event_type(raw: Option<&str>) -> EventType {
    match raw.map(EventType::from_label) {
        None => EventType::Adoption,
        Some(EventType::Unknown) => EventType::Discussion,
        Some(event) => event,
    }
}

impl Reader<'_> {
    /// Steps sourced from the decision itself and the motions it is based on.
    pub(crate) fn decision_events(&self, decision_uri: &str) -> Vec<ProvenanceStep> {
        let mut events = Vec::new();

        if let Some(meeting) = self.first(decision_uri, PROP_DECIDED_AT) {
            let kind = self.first(decision_uri, PROP_DECISION_TYPE);
            let description = self
                .first(decision_uri, PROP_TITLE)
                .unwrap_or_else(|| "Decision made".to_string());
            let mut step =
                self.meeting_step(&meeting, decision_event_type(kind.as_deref()), &description);
            step.related_uris.push(decision_uri.to_string());
            events.push(step);
        }

        for motion_uri in self.objects(decision_uri, PROP_BASED_ON_MOTION) {
            let Some(meeting) = self.first(&motion_uri, PROP_PROPOSED_AT) else {
                continue;
            };
            let mut step = self.meeting_step(&meeting, EventType::Proposal, "Motion proposed");
            self.attach_proposer(&mut step, &motion_uri);
            step.related_uris.push(motion_uri);
            events.push(step);
        }

        trace!(decision = decision_uri, events = events.len(), "discovered decision events");
        events
    }

    /// First decision affecting the provision that is typed as an adoption.
    pub(crate) fn adopting_decision(&self, provision_uri: &str) -> Option<String> {
        self.subjects(PROP_AFFECTS_PROVISION, provision_uri)
            .into_iter()
            .find(|decision_uri| {
                self.objects(decision_uri, PROP_DECISION_TYPE)
                    .iter()
                    .any(|raw| DecisionType::from_label(raw) == DecisionType::Adoption)
            })
    }
}
