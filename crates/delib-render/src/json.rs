use delib_core::entities::ProvenanceChain;

use crate::error::RenderError;

/// Pretty-printed JSON mirroring the chain field for field.
///
/// # Errors
///
/// Returns `RenderError::Json` if serialization fails.
pub fn render_json(chain: &ProvenanceChain) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(chain)?)
}

/// Decode a chain previously produced by [`render_json`].
///
/// # Errors
///
/// Returns `RenderError::Json` if the input is not a valid chain document.
pub fn parse_json(input: &str) -> Result<ProvenanceChain, RenderError> {
    Ok(serde_json::from_str(input)?)
}
