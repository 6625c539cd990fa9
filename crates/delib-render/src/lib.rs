//! # delib-render
//!
//! Presentation of provenance chains.
//!
//! Every renderer is a pure function of a
//! [`ProvenanceChain`](delib_core::entities::ProvenanceChain): none of them
//! mutate the chain or consult a fact store.
//!
//! - [`render_ascii`]: text tree grouped by meeting, with a summary line
//! - [`render_brief`]: one line of event types and the outcome
//! - [`render_html`]: standalone HTML document with inline styles
//! - [`render_json`] / [`parse_json`]: indented JSON and its decoder
//! - [`render_mermaid`]: Mermaid flowchart description

mod ascii;
mod brief;
mod duration;
pub mod error;
mod html;
mod json;
mod layout;
mod mermaid;

#[cfg(test)]
mod fixtures;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use delib_core::entities::ProvenanceChain;

pub use ascii::render_ascii;
pub use brief::render_brief;
pub use duration::format_duration;
pub use error::RenderError;
pub use html::render_html;
pub use json::{parse_json, render_json};
pub use mermaid::render_mermaid;

/// Output format selector for callers that choose a rendering at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Ascii,
    Brief,
    Html,
    Json,
    Mermaid,
}

impl OutputFormat {
    pub const ALL: [Self; 5] = [Self::Ascii, Self::Brief, Self::Html, Self::Json, Self::Mermaid];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Brief => "brief",
            Self::Html => "html",
            Self::Json => "json",
            Self::Mermaid => "mermaid",
        }
    }

    /// Render `chain` in this format.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Json` if JSON serialization fails.
    pub fn render(self, chain: &ProvenanceChain) -> Result<String, RenderError> {
        match self {
            Self::Ascii => Ok(render_ascii(chain)),
            Self::Brief => Ok(render_brief(chain)),
            Self::Html => Ok(render_html(chain)),
            Self::Json => render_json(chain),
            Self::Mermaid => Ok(render_mermaid(chain)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RenderError::UnknownFormat(s.to_string()))
    }
}
