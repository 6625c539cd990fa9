use delib_core::entities::ProvenanceChain;
use delib_core::labels::uri_label;

/// One-line summary: `"Article 5: PROPOSAL → AMENDMENT → ADOPTION [adopted, 3 meetings]"`.
///
/// Without a provision label, the tail of the provision URI is used.
#[must_use]
pub fn render_brief(chain: &ProvenanceChain) -> String {
    let label = match chain.provision_label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => uri_label(chain.provision_uri.as_deref().unwrap_or_default(), ""),
    };
    let events: Vec<&str> = chain
        .steps
        .iter()
        .map(|step| step.event_type.heading())
        .collect();

    format!(
        "{label}: {} [{}, {} meetings]",
        events.join(" → "),
        chain.current_state,
        chain.meeting_count
    )
}
