//! Plain text output formatter

use crate::types::{HeadingRecord, Outcome, RunResults};

/// Format a heading index as an indented outline, one heading per line.
///
/// Each line shows the 1-based source line, the section number, the title
/// and the anchor.
pub fn format_outline(headings: &[HeadingRecord]) -> String {
    headings
        .iter()
        .map(|h| {
            format!(
                "{:>4}  {}{} {} {}",
                h.line_number(),
                "  ".repeat(h.relative_level.saturating_sub(1)),
                h.section_number,
                h.title,
                h.anchor
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format run results as plain text: an outline per document, or the
/// reason the document could not be processed
pub fn format_text(results: &RunResults) -> String {
    let mut sections = Vec::new();
    for name in results.names() {
        let Some(report) = results.get(name) else {
            continue;
        };
        let body = match &report.outcome {
            Outcome::Failed(err) => format!("  error: {}", err),
            _ if report.headings.is_empty() => "  (no headings)".to_string(),
            _ => format_outline(&report.headings),
        };
        sections.push(format!("{}:\n{}", name, body));
    }
    sections.join("\n\n")
}
