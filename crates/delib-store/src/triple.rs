use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A single (subject, predicate, object) fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    /// Build a triple, rejecting empty components.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyComponent` naming the first empty position.
    pub fn new(subject: &str, predicate: &str, object: &str) -> Result<Self, StoreError> {
        for (position, value) in [
            ("subject", subject),
            ("predicate", predicate),
            ("object", object),
        ] {
            if value.is_empty() {
                return Err(StoreError::EmptyComponent { position });
            }
        }
        Ok(Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
        })
    }

    /// Whether this triple matches a pattern where `""` is a wildcard.
    #[must_use]
    pub fn matches(&self, subject: &str, predicate: &str, object: &str) -> bool {
        (subject.is_empty() || self.subject == subject)
            && (predicate.is_empty() || self.predicate == predicate)
            && (object.is_empty() || self.object == object)
    }
}

/// A query pattern; `None` positions match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriplePattern {
    pub subject: Option<String>,
    pub predicate: Option<String>,
    pub object: Option<String>,
}

impl TriplePattern {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn predicate(mut self, predicate: impl Into<String>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    #[must_use]
    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }
}
