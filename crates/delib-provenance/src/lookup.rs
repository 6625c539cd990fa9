//! Point lookups shared by discovery and correlation: labels, meeting steps,
//! actors and vote records.

use tracing::debug;

use delib_core::entities::{IndividualVote, ProvenanceStep, VoteRecord, parse_count};
use delib_core::enums::{EventType, VotePosition};
use delib_core::labels::uri_label;
use delib_core::time::{Timestamp, parse_timestamp};
use delib_core::vocab::{
    PROP_MAJORITY_REQUIRED, PROP_MEETING_DATE, PROP_ON_VOTE, PROP_PROPOSED_BY, PROP_TITLE,
    PROP_VOTE_ABSENT, PROP_VOTE_ABSTAIN, PROP_VOTE_AGAINST, PROP_VOTE_DATE,
    PROP_VOTE_EXPLANATION, PROP_VOTE_FOR, PROP_VOTE_POSITION, PROP_VOTE_QUESTION,
    PROP_VOTE_RESULT, PROP_VOTE_TYPE, PROP_VOTER, RDFS_LABEL,
};
use delib_store::FactStore;

/// Read-only view of the store for the duration of one query.
#[derive(Clone, Copy)]
pub(crate) struct Reader<'a> {
    store: &'a dyn FactStore,
    base_uri: &'a str,
    excerpt_chars: usize,
}

impl<'a> Reader<'a> {
    pub(crate) const fn new(store: &'a dyn FactStore, base_uri: &'a str, excerpt_chars: usize) -> Self {
        Self {
            store,
            base_uri,
            excerpt_chars,
        }
    }

    pub(crate) const fn excerpt_chars(&self) -> usize {
        self.excerpt_chars
    }

    pub(crate) fn first(&self, subject: &str, predicate: &str) -> Option<String> {
        self.store.first_object(subject, predicate)
    }

    pub(crate) fn objects(&self, subject: &str, predicate: &str) -> Vec<String> {
        self.store.objects(subject, predicate)
    }

    pub(crate) fn subjects(&self, predicate: &str, object: &str) -> Vec<String> {
        self.store.subjects(predicate, object)
    }

    /// Objects of every `(_, predicate, _)` triple, in store order.
    pub(crate) fn objects_of(&self, predicate: &str) -> Vec<String> {
        self.store
            .find("", predicate, "")
            .into_iter()
            .map(|t| t.object)
            .collect()
    }

    /// Human-readable name: `rdfs:label`, then title, then the URI tail.
    pub(crate) fn label(&self, uri: &str) -> String {
        self.first(uri, RDFS_LABEL)
            .or_else(|| self.first(uri, PROP_TITLE))
            .unwrap_or_else(|| uri_label(uri, self.base_uri))
    }

    /// Parsed date of the first `(subject, predicate, _)` fact.
    fn timestamp(&self, subject: &str, predicate: &str) -> Option<Timestamp> {
        let raw = self.first(subject, predicate)?;
        let parsed = parse_timestamp(&raw);
        if parsed.is_none() {
            debug!(subject, predicate, raw = %raw, "unparsable date, treating as undated");
        }
        parsed
    }

    /// A step at `meeting_uri`, labelled and dated from the meeting's facts.
    pub(crate) fn meeting_step(
        &self,
        meeting_uri: &str,
        event_type: EventType,
        description: &str,
    ) -> ProvenanceStep {
        ProvenanceStep::new(
            meeting_uri,
            self.label(meeting_uri),
            event_type,
            description,
            self.timestamp(meeting_uri, PROP_MEETING_DATE),
        )
    }

    /// Attach the first `proposed-by` of `subject` as the step's actor.
    pub(crate) fn attach_proposer(&self, step: &mut ProvenanceStep, subject: &str) {
        if let Some(actor) = self.first(subject, PROP_PROPOSED_BY) {
            step.actor_name = Some(self.label(&actor));
            step.actor = Some(actor);
        }
    }

    pub(crate) fn vote_record(&self, vote_uri: &str) -> VoteRecord {
        let count = |predicate: &str| {
            self.first(vote_uri, predicate)
                .map_or(0, |raw| parse_count(&raw))
        };

        VoteRecord {
            uri: vote_uri.to_string(),
            vote_date: self.timestamp(vote_uri, PROP_VOTE_DATE),
            vote_type: self.first(vote_uri, PROP_VOTE_TYPE),
            question: self.first(vote_uri, PROP_VOTE_QUESTION),
            result: self.first(vote_uri, PROP_VOTE_RESULT),
            majority_required: self.first(vote_uri, PROP_MAJORITY_REQUIRED),
            for_count: count(PROP_VOTE_FOR),
            against_count: count(PROP_VOTE_AGAINST),
            abstain_count: count(PROP_VOTE_ABSTAIN),
            absent_count: count(PROP_VOTE_ABSENT),
            individual_votes: self.individual_votes(vote_uri),
        }
    }

    /// Ballots linked to the vote through `on-vote`. Ballots without a voter
    /// or with an unrecognized position are skipped.
    fn individual_votes(&self, vote_uri: &str) -> Vec<IndividualVote> {
        self.subjects(PROP_ON_VOTE, vote_uri)
            .into_iter()
            .filter_map(|ballot| {
                let voter_uri = self.first(&ballot, PROP_VOTER)?;
                let position = self
                    .first(&ballot, PROP_VOTE_POSITION)
                    .and_then(|raw| VotePosition::from_label(&raw))?;
                Some(IndividualVote {
                    voter_name: self.label(&voter_uri),
                    voter_uri,
                    position,
                    explanation: self.first(&ballot, PROP_VOTE_EXPLANATION),
                })
            })
            .collect()
    }
}
