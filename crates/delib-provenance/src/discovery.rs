//! Provision-level event discovery.
//!
//! Each probe reads one fact pattern and turns every match into a step. Probes
//! run in a fixed order (proposals, discussions, version history, decisions,
//! deferrals) so ties in the later stable sort resolve the same way every time.

use tracing::trace;

use delib_core::entities::ProvenanceStep;
use delib_core::enums::{DecisionType, EventType};
use delib_core::labels::excerpt;
use delib_core::vocab::{
    PROP_ADOPTED_AT, PROP_AFFECTS_PROVISION, PROP_AMENDED_AT, PROP_DECIDED_AT,
    PROP_DECISION_TYPE, PROP_DEFERRED_TO, PROP_DISCUSSED_AT, PROP_HAS_VOTE, PROP_PROPOSED_AT,
    PROP_REJECTED_AT, PROP_TEXT, PROP_TITLE, PROP_VERSION_OF,
};

use crate::lookup::Reader;

/// A terminal outcome recorded on a version.
struct Outcome {
    event_type: EventType,
    marker: &'static str,
    verb: &'static str,
    fallback: &'static str,
}

const OUTCOMES: [Outcome; 2] = [
    Outcome {
        event_type: EventType::Adoption,
        marker: PROP_ADOPTED_AT,
        verb: "Adopted",
        fallback: "Provision adopted",
    },
    Outcome {
        event_type: EventType::Rejection,
        marker: PROP_REJECTED_AT,
        verb: "Rejected",
        fallback: "Amendment rejected",
    },
];

impl Reader<'_> {
    /// Every event tied to the provision, directly or through its versions.
    /// Unsorted and not de-duplicated.
    pub(crate) fn provision_events(&self, provision_uri: &str) -> Vec<ProvenanceStep> {
        let mut events = self.proposals(provision_uri);
        events.extend(self.discussions(provision_uri));
        for version_uri in self.subjects(PROP_VERSION_OF, provision_uri) {
            events.extend(self.amendments(&version_uri));
            for outcome in &OUTCOMES {
                events.extend(self.outcomes(&version_uri, outcome));
            }
        }
        events.extend(self.affecting_decisions(provision_uri));
        events.extend(self.deferrals(provision_uri));

        trace!(provision = provision_uri, events = events.len(), "discovered provision events");
        events
    }

    fn proposals(&self, provision_uri: &str) -> Vec<ProvenanceStep> {
        self.objects(provision_uri, PROP_PROPOSED_AT)
            .iter()
            .map(|meeting| {
                let mut step =
                    self.meeting_step(meeting, EventType::Proposal, "Initial proposal submitted");
                self.attach_proposer(&mut step, provision_uri);
                step
            })
            .collect()
    }

    fn discussions(&self, provision_uri: &str) -> Vec<ProvenanceStep> {
        self.objects(provision_uri, PROP_DISCUSSED_AT)
            .iter()
            .map(|meeting| self.meeting_step(meeting, EventType::Discussion, "General discussion"))
            .collect()
    }

    fn amendments(&self, version_uri: &str) -> Vec<ProvenanceStep> {
        let description = self.first(version_uri, PROP_TEXT).map_or_else(
            || "Amendment proposed".to_string(),
            |text| format!("Amendment: {}", excerpt(&text, self.excerpt_chars())),
        );

        self.objects(version_uri, PROP_AMENDED_AT)
            .iter()
            .map(|meeting| {
                let mut step = self.meeting_step(meeting, EventType::Amendment, &description);
                step.related_uris.push(version_uri.to_string());
                self.attach_proposer(&mut step, version_uri);
                step
            })
            .collect()
    }

    /// Adoption or rejection steps of a version, with the linked vote if any.
    fn outcomes(&self, version_uri: &str, outcome: &Outcome) -> Vec<ProvenanceStep> {
        let vote_uri = self.first(version_uri, PROP_HAS_VOTE);

        self.objects(version_uri, outcome.marker)
            .iter()
            .map(|meeting| {
                let mut step = self.meeting_step(meeting, outcome.event_type, outcome.fallback);
                step.related_uris.push(version_uri.to_string());
                if let Some(vote_uri) = &vote_uri {
                    let vote = self.vote_record(vote_uri);
                    step.description = format!("{} ({})", outcome.verb, vote.tally());
                    step.vote_record = Some(vote);
                }
                step
            })
            .collect()
    }

    /// One step per decision affecting the provision. Decisions without a
    /// decided-at meeting are skipped.
    fn affecting_decisions(&self, provision_uri: &str) -> Vec<ProvenanceStep> {
        self.subjects(PROP_AFFECTS_PROVISION, provision_uri)
            .into_iter()
            .filter_map(|decision_uri| {
                let meeting = self.first(&decision_uri, PROP_DECIDED_AT)?;
                let kind = self
                    .first(&decision_uri, PROP_DECISION_TYPE)
                    .map_or(DecisionType::Unrecognized, |raw| DecisionType::from_label(&raw));

                let mut step = self.meeting_step(&meeting, kind.event_type(), kind.description());
                if let Some(title) = self.first(&decision_uri, PROP_TITLE) {
                    step.description = title;
                }
                step.related_uris.push(decision_uri);
                Some(step)
            })
            .collect()
    }

    fn deferrals(&self, provision_uri: &str) -> Vec<ProvenanceStep> {
        self.objects(provision_uri, PROP_DEFERRED_TO)
            .iter()
            .map(|meeting| {
                self.meeting_step(meeting, EventType::Deferral, "Deferred to future meeting")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delib_store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn events(store: &MemoryStore, provision: &str) -> Vec<ProvenanceStep> {
        Reader::new(store, "", 100).provision_events(provision)
    }

    fn kinds(steps: &[ProvenanceStep]) -> Vec<EventType> {
        steps.iter().map(|s| s.event_type).collect()
    }

    #[test]
    fn empty_store_yields_nothing() {
        assert!(events(&MemoryStore::new(), "reg:article5").is_empty());
    }

    #[test]
    fn probes_run_in_fixed_order() {
        let store = MemoryStore::new();
        store
            .bulk_add([
                ("reg:article5", "reg:deferredTo", "reg:m4"),
                ("reg:decision1", "reg:affectsProvision", "reg:article5"),
                ("reg:decision1", "reg:decidedAt", "reg:m3"),
                ("reg:article5_v2", "reg:versionOf", "reg:article5"),
                ("reg:article5_v2", "reg:amendedAt", "reg:m2"),
                ("reg:article5", "reg:discussedAt", "reg:m1"),
                ("reg:article5", "reg:proposedAt", "reg:m1"),
            ])
            .unwrap();

        assert_eq!(
            kinds(&events(&store, "reg:article5")),
            vec![
                EventType::Proposal,
                EventType::Discussion,
                EventType::Amendment,
                EventType::Adoption,
                EventType::Deferral,
            ]
        );
    }

    #[test]
    fn amendment_uses_text_excerpt_and_version_proposer() {
        let store = MemoryStore::new();
        let text = "x".repeat(120);
        store
            .bulk_add([
                ("reg:article5_v2", "reg:versionOf", "reg:article5"),
                ("reg:article5_v2", "reg:amendedAt", "reg:m2"),
                ("reg:article5_v2", "reg:text", text.as_str()),
                ("reg:article5_v2", "reg:proposedBy", "reg:delegate_fr"),
                ("reg:delegate_fr", "rdfs:label", "France"),
            ])
            .unwrap();

        let steps = events(&store, "reg:article5");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].description, format!("Amendment: {}...", "x".repeat(100)));
        assert_eq!(steps[0].actor.as_deref(), Some("reg:delegate_fr"));
        assert_eq!(steps[0].actor_name.as_deref(), Some("France"));
        assert_eq!(steps[0].related_uris, vec!["reg:article5_v2"]);
    }

    #[test]
    fn rejection_without_vote_uses_fallback() {
        let store = MemoryStore::new();
        store
            .bulk_add([
                ("reg:article5_v3", "reg:versionOf", "reg:article5"),
                ("reg:article5_v3", "reg:rejectedAt", "reg:m3"),
            ])
            .unwrap();

        let steps = events(&store, "reg:article5");
        assert_eq!(steps[0].event_type, EventType::Rejection);
        assert_eq!(steps[0].description, "Amendment rejected");
        assert_eq!(steps[0].vote_record, None);
        assert_eq!(steps[0].actor, None);
    }

    #[test]
    fn decision_types_map_and_titles_win() {
        let store = MemoryStore::new();
        store
            .bulk_add([
                ("reg:d1", "reg:affectsProvision", "reg:article5"),
                ("reg:d1", "reg:decidedAt", "reg:m1"),
                ("reg:d1", "reg:decisionType", "deferred"),
                ("reg:d2", "reg:affectsProvision", "reg:article5"),
                ("reg:d2", "reg:decidedAt", "reg:m2"),
                ("reg:d2", "reg:decisionType", "noted"),
                ("reg:d3", "reg:affectsProvision", "reg:article5"),
                ("reg:d3", "reg:decidedAt", "reg:m3"),
                ("reg:d3", "reg:decisionType", "rejection"),
                ("reg:d3", "reg:title", "Article 5 struck"),
                ("reg:d4", "reg:affectsProvision", "reg:article5"),
            ])
            .unwrap();

        let steps = events(&store, "reg:article5");
        let shape: Vec<(EventType, &str)> = steps
            .iter()
            .map(|s| (s.event_type, s.description.as_str()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (EventType::Deferral, "Decision: deferred"),
                (EventType::Adoption, "Decision made"),
                (EventType::Rejection, "Article 5 struck"),
            ]
        );
        assert_eq!(steps[2].related_uris, vec!["reg:d3"]);
    }
}
