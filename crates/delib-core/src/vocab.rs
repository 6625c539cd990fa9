//! Predicate and class vocabulary expected in the fact store.
//!
//! The extraction layer populates the store with these compact (`prefix:name`)
//! identifiers. Provenance reconstruction only reads them.

// ---------------------------------------------------------------------------
// Standard predicates
// ---------------------------------------------------------------------------

pub const RDF_TYPE: &str = "rdf:type";
pub const RDFS_LABEL: &str = "rdfs:label";
pub const PROP_TITLE: &str = "reg:title";
pub const PROP_TEXT: &str = "reg:text";

// ---------------------------------------------------------------------------
// Provision classes
// ---------------------------------------------------------------------------

pub const CLASS_ARTICLE: &str = "reg:Article";
pub const CLASS_PARAGRAPH: &str = "reg:Paragraph";
pub const CLASS_SECTION: &str = "reg:Section";

/// Classes whose instances are tracked provisions, in ranking scan order.
pub const PROVISION_CLASSES: [&str; 3] = [CLASS_ARTICLE, CLASS_PARAGRAPH, CLASS_SECTION];

// ---------------------------------------------------------------------------
// Versions
// ---------------------------------------------------------------------------

pub const PROP_VERSION_OF: &str = "reg:versionOf";

// ---------------------------------------------------------------------------
// Lifecycle meeting markers
// ---------------------------------------------------------------------------

pub const PROP_PROPOSED_AT: &str = "reg:proposedAt";
pub const PROP_PROPOSED_BY: &str = "reg:proposedBy";
pub const PROP_DISCUSSED_AT: &str = "reg:discussedAt";
pub const PROP_AMENDED_AT: &str = "reg:amendedAt";
pub const PROP_ADOPTED_AT: &str = "reg:adoptedAt";
pub const PROP_REJECTED_AT: &str = "reg:rejectedAt";
pub const PROP_DEFERRED_TO: &str = "reg:deferredTo";

// ---------------------------------------------------------------------------
// Meetings
// ---------------------------------------------------------------------------

pub const PROP_MEETING_DATE: &str = "reg:meetingDate";

// ---------------------------------------------------------------------------
// Decisions and motions
// ---------------------------------------------------------------------------

pub const PROP_AFFECTS_PROVISION: &str = "reg:affectsProvision";
pub const PROP_DECISION_TYPE: &str = "reg:decisionType";
pub const PROP_DECIDED_AT: &str = "reg:decidedAt";
pub const PROP_BASED_ON_MOTION: &str = "reg:basedOnMotion";

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

pub const PROP_HAS_VOTE: &str = "reg:hasVote";
pub const PROP_VOTE_DATE: &str = "reg:voteDate";
pub const PROP_VOTE_TYPE: &str = "reg:voteType";
pub const PROP_VOTE_QUESTION: &str = "reg:voteQuestion";
pub const PROP_VOTE_RESULT: &str = "reg:voteResult";
pub const PROP_MAJORITY_REQUIRED: &str = "reg:majorityRequired";
pub const PROP_VOTE_FOR: &str = "reg:voteFor";
pub const PROP_VOTE_AGAINST: &str = "reg:voteAgainst";
pub const PROP_VOTE_ABSTAIN: &str = "reg:voteAbstain";
pub const PROP_VOTE_ABSENT: &str = "reg:voteAbsent";
pub const PROP_ON_VOTE: &str = "reg:onVote";
pub const PROP_VOTER: &str = "reg:voter";
pub const PROP_VOTE_POSITION: &str = "reg:votePosition";
pub const PROP_VOTE_EXPLANATION: &str = "reg:voteExplanation";
