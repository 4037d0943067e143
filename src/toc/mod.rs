//! Table of contents generation and synchronization
//!
//! A TOC is a run of bullet lines `* [title](#anchor)`, indented four spaces
//! per level. An existing TOC is found structurally: a bullet line counts
//! only if the anchor derived from its title occurs in its link target, and
//! the block is the first contiguous run of such lines.

use crate::buffer::TextBuffer;
use crate::helpers::gfm_anchor;
use crate::types::{Error, HeadingRecord, Result};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static TOC_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\* \[(?P<title>.+)\]\((?P<target>.+)\)").expect("valid regex")
});

/// Spaces per TOC nesting level
pub const INDENT_WIDTH: usize = 4;

/// Render one TOC entry
pub fn toc_line(heading: &HeadingRecord) -> String {
    format!(
        "{}* [{}]({})",
        " ".repeat(INDENT_WIDTH * heading.relative_level.saturating_sub(1)),
        heading.title,
        heading.anchor
    )
}

/// Build TOC lines for `headings`.
///
/// When `levels` is non-empty only headings whose relative level it
/// contains are listed; the others are dropped without affecting the
/// indentation of the rest.
pub fn build_toc(headings: &[HeadingRecord], levels: &[usize]) -> Vec<String> {
    headings
        .iter()
        .filter(|h| levels.is_empty() || levels.contains(&h.relative_level))
        .map(toc_line)
        .collect()
}

/// Whether `line` looks like an entry of a generated TOC
pub fn is_toc_line(line: &str) -> bool {
    let Some(caps) = TOC_LINE_RE.captures(line) else {
        return false;
    };
    match (caps.name("title"), caps.name("target")) {
        (Some(title), Some(target)) => target.as_str().contains(&gfm_anchor(title.as_str())),
        _ => false,
    }
}

/// Locate the existing TOC block as a half-open line range.
///
/// A block that runs to the last line of the document includes that line.
pub fn find_toc<B: TextBuffer + ?Sized>(buffer: &B) -> Option<Range<usize>> {
    let len = buffer.line_count();
    let mut start = None;
    for index in 0..len {
        let is_toc = buffer.line(index).is_some_and(is_toc_line);
        match (start, is_toc) {
            (None, true) => start = Some(index),
            (Some(first), false) => {
                log::debug!("found TOC at lines {}..{}", first + 1, index);
                return Some(first..index);
            }
            _ => {}
        }
    }
    let range = start.map(|first| first..len);
    match &range {
        Some(r) => log::debug!("found TOC at lines {}..{} (end of document)", r.start + 1, r.end),
        None => log::debug!("no TOC in {} line(s)", len),
    }
    range
}

/// Insert a freshly built TOC before the 0-based line `at`.
///
/// Returns the inserted range.
pub fn insert_toc<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    headings: &[HeadingRecord],
    levels: &[usize],
    at: usize,
) -> Result<Range<usize>> {
    let len = buffer.line_count();
    if at > len {
        return Err(Error::LineOutOfRange { line: at, len });
    }
    let toc = build_toc(headings, levels);
    let range = at..at + toc.len();
    buffer.insert_lines(at, toc);
    Ok(range)
}

/// Replace the existing TOC block with a freshly built one.
///
/// Returns the range of the new block, or [`Error::TocNotFound`] with the
/// buffer untouched.
pub fn update_toc<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    headings: &[HeadingRecord],
    levels: &[usize],
) -> Result<Range<usize>> {
    let Some(old) = find_toc(buffer) else {
        log::warn!("{}", Error::TocNotFound);
        return Err(Error::TocNotFound);
    };
    let toc = build_toc(headings, levels);
    let range = old.start..old.start + toc.len();
    buffer.replace_range(old, toc);
    Ok(range)
}

/// Replace the existing TOC block with a single blank line
pub fn remove_toc<B: TextBuffer + ?Sized>(buffer: &mut B) -> Result<()> {
    let Some(old) = find_toc(buffer) else {
        log::warn!("{}", Error::TocNotFound);
        return Err(Error::TocNotFound);
    };
    buffer.replace_range(old, vec![String::new()]);
    Ok(())
}
