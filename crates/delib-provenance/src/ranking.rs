//! Cross-provision ranking by chain length.

use std::collections::HashSet;

use tracing::debug;

use delib_core::entities::ChainSummary;
use delib_core::errors::CoreError;
use delib_core::vocab::{PROP_VERSION_OF, PROVISION_CLASSES, RDF_TYPE};

use crate::builder::ProvenanceBuilder;
use crate::lookup::Reader;

impl Reader<'_> {
    /// Typed provisions (article, paragraph, section) followed by version-of
    /// targets not already listed, each once, in store order.
    fn candidate_provisions(&self) -> Vec<String> {
        let typed = PROVISION_CLASSES
            .iter()
            .flat_map(|class| self.subjects(RDF_TYPE, class));
        let versioned = self.objects_of(PROP_VERSION_OF);

        let mut seen = HashSet::new();
        typed
            .chain(versioned)
            .filter(|uri| seen.insert(uri.clone()))
            .collect()
    }
}

impl ProvenanceBuilder {
    /// Provisions with the most discoverable events, longest first.
    ///
    /// Counts are taken before de-duplication. Provisions without events are
    /// omitted, equal counts keep discovery order, and a `limit` of zero
    /// returns every provision.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NilStore` if the builder has no fact store.
    pub fn query_longest_chains(&self, limit: usize) -> Result<Vec<ChainSummary>, CoreError> {
        let reader = self.reader()?;

        let mut summaries: Vec<ChainSummary> = reader
            .candidate_provisions()
            .into_iter()
            .filter_map(|provision_uri| {
                let step_count = reader.provision_events(&provision_uri).len();
                (step_count > 0).then(|| ChainSummary {
                    provision_label: reader.label(&provision_uri),
                    provision_uri,
                    step_count,
                })
            })
            .collect();

        summaries.sort_by(|a, b| b.step_count.cmp(&a.step_count));
        if limit > 0 {
            summaries.truncate(limit);
        }

        debug!(limit, returned = summaries.len(), "ranked provisions by chain length");
        Ok(summaries)
    }

    /// [`query_longest_chains`](Self::query_longest_chains) with the
    /// configured ranking limit.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NilStore` if the builder has no fact store.
    pub fn top_chains(&self) -> Result<Vec<ChainSummary>, CoreError> {
        self.query_longest_chains(self.ranking_limit())
    }
}
