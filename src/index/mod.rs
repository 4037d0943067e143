//! Heading index
//!
//! One pass over a document: classify every line, number every heading,
//! derive a unique anchor for each. Any numbering error aborts the pass.

use crate::buffer::TextBuffer;
use crate::classifier::{LineClassifier, split_heading};
use crate::helpers::{AnchorSet, gfm_anchor};
use crate::numbering::SectionNumberer;
use crate::types::{Error, HeadingRecord, Result};

/// Every heading of a document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    /// Heading records ordered by line
    pub headings: Vec<HeadingRecord>,

    /// Marker count of the first heading
    pub baseline: Option<usize>,
}

impl DocumentIndex {
    /// Index `buffer`
    pub fn build<B: TextBuffer + ?Sized>(buffer: &B) -> Result<Self> {
        let mut classifier = LineClassifier::new();
        let mut numberer = SectionNumberer::new();
        let mut anchors = AnchorSet::new();
        let mut headings = Vec::new();

        for index in 0..buffer.line_count() {
            let Some(line) = buffer.line(index) else {
                continue;
            };
            let level = classifier.classify(line);
            if level == 0 {
                continue;
            }

            let title = split_heading(line)
                .map(|(_, rest)| rest.trim())
                .unwrap_or_default()
                .to_string();
            let anchor = anchors.claim(gfm_anchor(&title));

            let section_number = numberer.number(level).map_err(|source| Error::Numbering {
                line: index + 1,
                source,
            })?;
            let relative_level = numberer.relative_level(level).unwrap_or(1);

            headings.push(HeadingRecord {
                line_index: index,
                absolute_level: level,
                relative_level,
                section_number,
                title,
                anchor,
            });
        }

        log::debug!(
            "indexed {} heading(s) in {} line(s), baseline {:?}",
            headings.len(),
            buffer.line_count(),
            numberer.baseline()
        );

        Ok(Self {
            headings,
            baseline: numberer.baseline(),
        })
    }

    /// Number of headings
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Whether the document has no headings
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Iterate over the heading records
    pub fn iter(&self) -> std::slice::Iter<'_, HeadingRecord> {
        self.headings.iter()
    }

    /// The heading on a 0-based line, if there is one
    pub fn heading_at_line(&self, line_index: usize) -> Option<&HeadingRecord> {
        self.headings
            .binary_search_by_key(&line_index, |h| h.line_index)
            .ok()
            .map(|i| &self.headings[i])
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = &'a HeadingRecord;
    type IntoIter = std::slice::Iter<'a, HeadingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}

/// Index `buffer`, returning only the heading records
pub fn build_index<B: TextBuffer + ?Sized>(buffer: &B) -> Result<Vec<HeadingRecord>> {
    DocumentIndex::build(buffer).map(|index| index.headings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumberingError;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_records() {
        let lines = doc(&["## Intro", "", "text", "### Setup Guide", "## Usage"]);
        let index = DocumentIndex::build(&lines).unwrap();
        assert_eq!(index.baseline, Some(2));
        assert_eq!(index.len(), 3);

        let setup = &index.headings[1];
        assert_eq!(setup.line_index, 3);
        assert_eq!(setup.absolute_level, 3);
        assert_eq!(setup.relative_level, 2);
        assert_eq!(setup.section_number, "1.1");
        assert_eq!(setup.title, "Setup Guide");
        assert_eq!(setup.anchor, "#setup-guide");

        assert_eq!(index.headings[2].section_number, "2");
    }

    #[test]
    fn test_duplicate_titles_get_suffixes() {
        let lines = doc(&["# Setup", "# setup", "# Setup"]);
        let anchors: Vec<String> = build_index(&lines)
            .unwrap()
            .into_iter()
            .map(|h| h.anchor)
            .collect();
        assert_eq!(anchors, vec!["#setup", "#setup-1", "#setup-2"]);
    }

    #[test]
    fn test_existing_number_is_part_of_title() {
        let lines = doc(&["# 1 Intro", "## 1.1 Details"]);
        let headings = build_index(&lines).unwrap();
        assert_eq!(headings[0].title, "1 Intro");
        assert_eq!(headings[0].anchor, "#1-intro");
        assert_eq!(headings[1].anchor, "#11-details");
    }

    #[test]
    fn test_skip_level_reports_line() {
        let lines = doc(&["# A", "", "### C"]);
        let err = build_index(&lines).unwrap_err();
        match err {
            Error::Numbering { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, NumberingError::SkipLevel { level: 3, parent: 2 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_reports_line() {
        let lines = doc(&["## A", "# B"]);
        let err = build_index(&lines).unwrap_err();
        assert_eq!(err.line_number(), Some(2));
        assert!(matches!(
            err,
            Error::Numbering {
                source: NumberingError::OutOfRange { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_code_blocks_do_not_count() {
        let lines = doc(&["# A", "```sh", "# comment", "```", "", "    # code", "## B"]);
        let index = DocumentIndex::build(&lines).unwrap();
        let titles: Vec<&str> = index.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_heading_at_line() {
        let lines = doc(&["# A", "text", "## B"]);
        let index = DocumentIndex::build(&lines).unwrap();
        assert_eq!(index.heading_at_line(2).map(|h| h.title.as_str()), Some("B"));
        assert!(index.heading_at_line(1).is_none());
    }

    #[test]
    fn test_empty_document() {
        let lines: Vec<String> = Vec::new();
        let index = DocumentIndex::build(&lines).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.baseline, None);
    }
}
