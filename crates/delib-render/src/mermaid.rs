use std::fmt::Write;

use delib_core::entities::ProvenanceChain;
use delib_core::enums::EventType;

/// Node fill for each event-type class.
const CLASS_FILLS: &[(EventType, &str)] = &[
    (EventType::Proposal, "#28a745"),
    (EventType::Discussion, "#6c757d"),
    (EventType::Amendment, "#fd7e14"),
    (EventType::Vote, "#007bff"),
    (EventType::Deferral, "#ffc107"),
    (EventType::Adoption, "#28a745"),
    (EventType::Rejection, "#dc3545"),
    (EventType::Withdrawal, "#6c757d"),
    (EventType::Unknown, "#adb5bd"),
];

/// Mermaid labels are double-quoted; quotes inside must use entity codes.
fn node_text(text: &str) -> String {
    text.replace('"', "#quot;")
}

/// Render the chain as a Mermaid top-down flowchart.
///
/// One node per step (event type, meeting label, date), edges labelled with
/// the state the target step leads to, and a class per event type.
#[must_use]
pub fn render_mermaid(chain: &ProvenanceChain) -> String {
    let mut out = String::from("graph TD\n");

    if chain.is_empty() {
        out.push_str("    empty[No provenance steps]\n");
        return out;
    }

    for (i, step) in chain.steps.iter().enumerate() {
        let mut label = format!(
            "{}<br/>{}",
            step.event_type.heading(),
            node_text(&step.meeting_label)
        );
        if let Some(date) = step.date_label() {
            let _ = write!(label, "<br/>{date}");
        }
        let _ = writeln!(
            out,
            "    step{i}[\"{label}\"]:::{}",
            step.event_type.as_str()
        );
        if i > 0 {
            let _ = writeln!(out, "    step{} -->|{}| step{i}", i - 1, step.to_state);
        }
    }

    out.push('\n');
    for (event_type, fill) in CLASS_FILLS {
        let _ = writeln!(
            out,
            "    classDef {} fill:{fill},color:white",
            event_type.as_str()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::article5_chain;
    use pretty_assertions::assert_eq;

    #[test]
    fn nodes_and_edges() {
        let out = render_mermaid(&article5_chain());
        let body: Vec<&str> = out.lines().take(6).collect();
        assert_eq!(
            body,
            vec![
                "graph TD",
                "    step0[\"PROPOSAL<br/>Meeting 1<br/>2024-01-15\"]:::proposal",
                "    step1[\"AMENDMENT<br/>Meeting 2<br/>2024-02-20\"]:::amendment",
                "    step0 -->|amended| step1",
                "    step2[\"ADOPTION<br/>Meeting 3<br/>2024-03-10\"]:::adoption",
                "    step1 -->|adopted| step2",
            ]
        );
    }

    #[test]
    fn every_event_type_has_a_class() {
        let out = render_mermaid(&article5_chain());
        for event_type in EventType::ALL {
            assert!(out.contains(&format!("classDef {} ", event_type.as_str())));
        }
    }

    #[test]
    fn empty_chain_placeholder() {
        assert_eq!(
            render_mermaid(&ProvenanceChain::default()),
            "graph TD\n    empty[No provenance steps]\n"
        );
    }

    #[test]
    fn quotes_in_labels_are_encoded() {
        let mut chain = article5_chain();
        chain.steps[0].meeting_label = "The \"Big\" Plenary".into();
        assert!(render_mermaid(&chain).contains("PROPOSAL<br/>The #quot;Big#quot; Plenary"));
    }
}
