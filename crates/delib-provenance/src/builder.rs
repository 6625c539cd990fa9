//! `ProvenanceBuilder`: entry points for chain reconstruction.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use delib_config::GeneralConfig;
use delib_core::entities::{ProvenanceChain, ProvenanceStep};
use delib_core::errors::CoreError;
use delib_core::vocab::PROP_AFFECTS_PROVISION;
use delib_store::FactStore;

use crate::assemble::assemble;
use crate::lookup::Reader;
use crate::stats::annotate;

/// Default length of amendment excerpts in step descriptions.
pub const DEFAULT_EXCERPT_CHARS: usize = 100;

/// Default number of provisions returned by [`ProvenanceBuilder::top_chains`].
pub const DEFAULT_RANKING_LIMIT: usize = 10;

/// Reconstructs provenance chains from a shared fact store.
///
/// The builder holds no mutable state, so one instance can serve concurrent
/// callers as long as the store supports concurrent reads. Every query reads
/// the store afresh; chains are never cached.
#[derive(Clone)]
pub struct ProvenanceBuilder {
    store: Option<Arc<dyn FactStore>>,
    base_uri: String,
    excerpt_chars: usize,
    ranking_limit: usize,
}

impl fmt::Debug for ProvenanceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvenanceBuilder")
            .field("has_store", &self.store.is_some())
            .field("base_uri", &self.base_uri)
            .field("excerpt_chars", &self.excerpt_chars)
            .field("ranking_limit", &self.ranking_limit)
            .finish()
    }
}

impl ProvenanceBuilder {
    /// Create a builder over `store`. `base_uri` is stripped from URIs before
    /// deriving fallback labels.
    #[must_use]
    pub fn new(store: Arc<dyn FactStore>, base_uri: impl Into<String>) -> Self {
        Self {
            store: Some(store),
            base_uri: base_uri.into(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            ranking_limit: DEFAULT_RANKING_LIMIT,
        }
    }

    /// A builder with no store attached. Every query fails with
    /// `CoreError::NilStore`.
    #[must_use]
    pub fn without_store(base_uri: impl Into<String>) -> Self {
        Self {
            store: None,
            base_uri: base_uri.into(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            ranking_limit: DEFAULT_RANKING_LIMIT,
        }
    }

    /// Create a builder using the `[general]` configuration section.
    #[must_use]
    pub fn from_config(store: Arc<dyn FactStore>, config: &GeneralConfig) -> Self {
        Self::new(store, config.base_uri.clone())
            .with_excerpt_chars(config.excerpt_len())
            .with_ranking_limit(config.ranking_len())
    }

    #[must_use]
    pub const fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }

    #[must_use]
    pub const fn with_ranking_limit(mut self, ranking_limit: usize) -> Self {
        self.ranking_limit = ranking_limit;
        self
    }

    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    #[must_use]
    pub const fn ranking_limit(&self) -> usize {
        self.ranking_limit
    }

    pub(crate) fn reader(&self) -> Result<Reader<'_>, CoreError> {
        let store = self.store.as_deref().ok_or(CoreError::NilStore)?;
        Ok(Reader::new(store, &self.base_uri, self.excerpt_chars))
    }

    /// Reconstruct the history of a provision.
    ///
    /// The chain's `final_decision` is the first decision affecting the
    /// provision that is typed as an adoption. A provision with no events
    /// yields an empty chain, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NilStore` if the builder has no store, or
    /// `CoreError::InvalidArgument` if `provision_uri` is empty.
    pub fn build_chain_for_provision(
        &self,
        provision_uri: &str,
    ) -> Result<ProvenanceChain, CoreError> {
        let reader = self.reader()?;
        if provision_uri.is_empty() {
            return Err(CoreError::invalid_argument("provision URI"));
        }

        let mut chain = ProvenanceChain::for_provision(provision_uri, reader.label(provision_uri));
        let events = reader.provision_events(provision_uri);
        let discovered = events.len();

        chain.steps = assemble(events);
        chain.final_decision = reader.adopting_decision(provision_uri);
        annotate(&mut chain);

        debug!(
            provision = provision_uri,
            discovered,
            steps = chain.steps.len(),
            state = %chain.current_state,
            "built provision chain"
        );
        Ok(chain)
    }

    /// Reconstruct the history leading to a decision.
    ///
    /// Events of the provision the decision affects (if any) are merged with
    /// the decision's own step and its motions.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NilStore` if the builder has no store, or
    /// `CoreError::InvalidArgument` if `decision_uri` is empty.
    pub fn build_chain_for_decision(&self, decision_uri: &str) -> Result<ProvenanceChain, CoreError> {
        let reader = self.reader()?;
        if decision_uri.is_empty() {
            return Err(CoreError::invalid_argument("decision URI"));
        }

        let mut chain = ProvenanceChain::for_decision(decision_uri);
        let mut events = Vec::new();
        if let Some(provision_uri) = reader.first(decision_uri, PROP_AFFECTS_PROVISION) {
            chain.provision_label = Some(reader.label(&provision_uri));
            events = reader.provision_events(&provision_uri);
            chain.provision_uri = Some(provision_uri);
        }
        events.extend(reader.decision_events(decision_uri));
        let discovered = events.len();

        chain.steps = assemble(events);
        annotate(&mut chain);

        debug!(
            decision = decision_uri,
            provision = chain.provision_uri.as_deref().unwrap_or_default(),
            discovered,
            steps = chain.steps.len(),
            "built decision chain"
        );
        Ok(chain)
    }

    /// Raw provision-level events, unsorted and not de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NilStore` if the builder has no store.
    pub fn find_provision_events(
        &self,
        provision_uri: &str,
    ) -> Result<Vec<ProvenanceStep>, CoreError> {
        Ok(self.reader()?.provision_events(provision_uri))
    }

    /// Raw events sourced from a decision and its motions.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NilStore` if the builder has no store.
    pub fn find_decision_events(
        &self,
        decision_uri: &str,
    ) -> Result<Vec<ProvenanceStep>, CoreError> {
        Ok(self.reader()?.decision_events(decision_uri))
    }
}
