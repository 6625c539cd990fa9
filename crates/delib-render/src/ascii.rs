use std::fmt::Write;

use delib_core::entities::ProvenanceChain;

use crate::duration::format_duration;
use crate::layout::{EMPTY_MESSAGE, meeting_groups, state_line, title, vote_line};

/// Render the chain as a text tree grouped by meeting, followed by a
/// one-line summary.
///
/// ```text
/// Provenance Chain: Article 5
/// ═══════════════════════════
///
/// Meeting 1 (2024-01-15)
///   ├─ [PROPOSAL] Initial proposal submitted
///   │  State: none → proposed
///   │
/// Meeting 3 (2024-03-10)
///   └─ [ADOPTION] Adopted (24-3-1)
///      State: proposed → adopted
///      Vote: 24 for, 3 against, 1 abstain
///
/// Duration: 55 days | Meetings: 2 | Amendments: 0 | Votes: 0
/// ```
#[must_use]
pub fn render_ascii(chain: &ProvenanceChain) -> String {
    let title = title(chain);
    let mut out = format!("{title}\n{}\n\n", "═".repeat(title.chars().count()));

    if chain.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    let groups = meeting_groups(chain);
    let last_group = groups.len().saturating_sub(1);
    for (i, group) in groups.iter().enumerate() {
        match &group.date {
            Some(date) => {
                let _ = writeln!(out, "{} ({date})", group.label);
            }
            None => {
                let _ = writeln!(out, "{}", group.label);
            }
        }

        let last_step = group.steps.len().saturating_sub(1);
        for (j, step) in group.steps.iter().enumerate() {
            let is_last = i == last_group && j == last_step;
            let (connector, rail) = if is_last { ("└─", " ") } else { ("├─", "│") };

            let _ = writeln!(
                out,
                "  {connector} [{}] {}",
                step.event_type.heading(),
                step.description
            );
            let _ = writeln!(out, "  {rail}  {}", state_line(step));
            if let Some(actor) = &step.actor_name {
                let _ = writeln!(out, "  {rail}  By: {actor}");
            }
            if let Some(vote) = &step.vote_record {
                let _ = writeln!(out, "  {rail}  {}", vote_line(vote));
            }
        }

        if i < last_group {
            out.push_str("  │\n");
        }
    }

    let _ = writeln!(
        out,
        "\nDuration: {} | Meetings: {} | Amendments: {} | Votes: {}",
        format_duration(chain.total_duration),
        chain.meeting_count,
        chain.amendment_count,
        chain.vote_count
    );
    out
}
