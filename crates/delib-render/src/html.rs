use std::fmt::Write;

use delib_core::entities::ProvenanceChain;

use crate::duration::format_duration;
use crate::layout::{EMPTY_MESSAGE, meeting_groups, state_line, title, vote_line};

const STYLE: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 20px; }
h1 { color: #333; }
.chain { margin: 20px 0; }
.meeting { margin-bottom: 20px; }
.meeting-header { font-weight: bold; color: #0066cc; font-size: 1.1em; }
.meeting-date { color: #666; font-size: 0.9em; }
.step { margin: 10px 0 10px 30px; padding: 10px; border-left: 3px solid #ddd; }
.step.proposal { border-color: #28a745; }
.step.discussion { border-color: #6c757d; }
.step.amendment { border-color: #fd7e14; }
.step.vote { border-color: #007bff; }
.step.adoption { border-color: #28a745; background: #e6ffec; }
.step.rejection { border-color: #dc3545; background: #ffebe9; }
.step.deferral { border-color: #ffc107; }
.step.withdrawal { border-color: #6c757d; }
.step.unknown { border-color: #ddd; }
.event-type { font-weight: bold; color: #333; }
.description { margin-top: 5px; }
.state-change { color: #666; font-size: 0.9em; margin-top: 5px; }
.actor { color: #0066cc; font-size: 0.9em; }
.vote-record { background: #f5f5f5; padding: 5px 10px; margin-top: 5px; border-radius: 3px; }
.summary { background: #f5f5f5; padding: 15px; border-radius: 5px; margin-top: 20px; }
.summary-item { display: inline-block; margin-right: 20px; }
.summary-value { font-weight: bold; font-size: 1.2em; }
";

/// Escape text for element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the chain as a self-contained HTML document with inline styles.
///
/// Each step carries a CSS class named after its event type.
#[must_use]
pub fn render_html(chain: &ProvenanceChain) -> String {
    let title = escape(&title(chain));
    let mut out = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    );

    if chain.is_empty() {
        let _ = writeln!(out, "<p>{EMPTY_MESSAGE}</p>");
        out.push_str("</body>\n</html>\n");
        return out;
    }

    out.push_str("<div class=\"chain\">\n");
    for group in meeting_groups(chain) {
        out.push_str("<div class=\"meeting\">\n");
        let _ = write!(out, "<div class=\"meeting-header\">{}", escape(&group.label));
        if let Some(date) = &group.date {
            let _ = write!(out, " <span class=\"meeting-date\">({date})</span>");
        }
        out.push_str("</div>\n");

        for step in &group.steps {
            let _ = writeln!(out, "<div class=\"step {}\">", step.event_type.as_str());
            let _ = writeln!(
                out,
                "<span class=\"event-type\">[{}]</span>",
                step.event_type.heading()
            );
            let _ = writeln!(
                out,
                "<div class=\"description\">{}</div>",
                escape(&step.description)
            );
            let _ = writeln!(out, "<div class=\"state-change\">{}</div>", state_line(step));
            if let Some(actor) = &step.actor_name {
                let _ = writeln!(out, "<div class=\"actor\">By: {}</div>", escape(actor));
            }
            if let Some(vote) = &step.vote_record {
                let _ = writeln!(out, "<div class=\"vote-record\">{}</div>", vote_line(vote));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"summary\">\n");
    for (value, name) in [
        (format_duration(chain.total_duration), "Duration"),
        (chain.meeting_count.to_string(), "Meetings"),
        (chain.amendment_count.to_string(), "Amendments"),
        (chain.vote_count.to_string(), "Votes"),
    ] {
        let _ = writeln!(
            out,
            "<div class=\"summary-item\"><span class=\"summary-value\">{}</span> {name}</div>",
            escape(&value)
        );
    }
    let _ = writeln!(
        out,
        "<div class=\"summary-item\">Final State: <span class=\"summary-value\">{}</span></div>",
        chain.current_state
    );
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
