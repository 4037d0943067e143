//! Heading records produced by an index pass

use serde::Serialize;

/// One detected heading, with its number and link target.
///
/// Records are rebuilt from scratch on every index pass and are ordered by
/// `line_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// 0-based line index within the document
    pub line_index: usize,

    /// Number of marker characters on the line
    pub absolute_level: usize,

    /// Level relative to the first heading of the document, starting at 1
    pub relative_level: usize,

    /// Dotted section number, e.g. `2.1`
    pub section_number: String,

    /// Everything after the marker run, trimmed
    pub title: String,

    /// Unique anchor including the leading `#`, e.g. `#getting-started`
    pub anchor: String,
}

impl HeadingRecord {
    /// 1-based line number, for diagnostics
    pub fn line_number(&self) -> usize {
        self.line_index + 1
    }
}
