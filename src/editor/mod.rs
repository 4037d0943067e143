//! Section numbers on heading lines
//!
//! Rewrites the marker run of each indexed heading together with any
//! number that follows it. The caller is responsible for refreshing the TOC
//! afterwards; see [`crate::ops`].

use crate::buffer::TextBuffer;
use crate::types::HeadingRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Leading marker run, at least one space, then an optional old number
static MARKER_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(#+)\s+[\d.]*\s*").expect("valid regex"));

fn rewrite_line(line: &str, number: Option<&str>) -> Option<String> {
    let caps = MARKER_NUMBER_RE.captures(line)?;
    let whole = caps.get(0)?;
    let indent = caps.get(1)?.as_str();
    let marker = caps.get(2)?.as_str();

    let mut out = String::with_capacity(line.len() + 8);
    out.push_str(indent);
    out.push_str(marker);
    out.push(' ');
    if let Some(number) = number {
        out.push_str(number);
        out.push(' ');
    }
    out.push_str(&line[whole.end()..]);
    Some(out)
}

fn rewrite_all<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    headings: &[HeadingRecord],
    with_number: bool,
) -> usize {
    let mut changed = 0;
    for heading in headings {
        let Some(line) = buffer.line(heading.line_index) else {
            continue;
        };
        let number = with_number.then_some(heading.section_number.as_str());
        if let Some(new_line) = rewrite_line(line, number)
            && new_line != line
        {
            buffer.set_line(heading.line_index, new_line);
            changed += 1;
        }
    }
    changed
}

/// Put each heading's section number right after its marker run.
///
/// A number already present is replaced. Returns the number of lines changed.
pub fn add_numbers<B: TextBuffer + ?Sized>(buffer: &mut B, headings: &[HeadingRecord]) -> usize {
    let changed = rewrite_all(buffer, headings, true);
    log::debug!("numbered {} of {} heading(s)", changed, headings.len());
    changed
}

/// Strip the number following each heading's marker run.
///
/// Returns the number of lines changed.
pub fn remove_numbers<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    headings: &[HeadingRecord],
) -> usize {
    let changed = rewrite_all(buffer, headings, false);
    log::debug!("unnumbered {} of {} heading(s)", changed, headings.len());
    changed
}
