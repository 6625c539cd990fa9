//! Engine-wide settings.

use serde::{Deserialize, Serialize};

/// Default number of provisions returned by a ranking query.
const fn default_ranking_limit() -> u32 {
    10
}

/// Default length of amendment text excerpts, in characters.
const fn default_excerpt_chars() -> u32 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Prefix stripped from URIs before deriving fallback labels.
    #[serde(default)]
    pub base_uri: String,

    /// Number of provisions a ranking query returns; `0` means all.
    #[serde(default = "default_ranking_limit")]
    pub ranking_limit: u32,

    /// Characters of amendment text kept in step descriptions.
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_uri: String::new(),
            ranking_limit: default_ranking_limit(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

impl GeneralConfig {
    /// Excerpt length as a `usize`.
    #[must_use]
    pub fn excerpt_len(&self) -> usize {
        usize::try_from(self.excerpt_chars).unwrap_or(usize::MAX)
    }

    /// Ranking limit as a `usize`.
    #[must_use]
    pub fn ranking_len(&self) -> usize {
        usize::try_from(self.ranking_limit).unwrap_or(usize::MAX)
    }
}
