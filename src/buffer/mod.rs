//! Line-indexed text buffers
//!
//! Every component works against [`TextBuffer`], the narrow interface an
//! editor host would provide. [`Document`] is the owned implementation used
//! for files and strings.

use crate::helpers::{detect_line_ending, join_lines, split_lines};
use std::ops::Range;

/// An ordered, mutable sequence of lines
pub trait TextBuffer {
    /// Number of lines
    fn line_count(&self) -> usize;

    /// Line at a 0-based index
    fn line(&self, index: usize) -> Option<&str>;

    /// Replace the line at `index`; out-of-range indices are ignored
    fn set_line(&mut self, index: usize, text: String);

    /// Replace a contiguous range with new lines (the count may change)
    fn replace_range(&mut self, range: Range<usize>, lines: Vec<String>);

    /// Insert lines before the 0-based `index`; `index == line_count()` appends
    fn insert_lines(&mut self, index: usize, lines: Vec<String>) {
        self.replace_range(index..index, lines);
    }

    /// Copy of the lines in `range`
    fn lines_in(&self, range: Range<usize>) -> Vec<String> {
        range
            .filter_map(|i| self.line(i).map(str::to_string))
            .collect()
    }

    /// Copy of every line
    fn to_lines(&self) -> Vec<String> {
        self.lines_in(0..self.line_count())
    }
}

impl TextBuffer for Vec<String> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }

    fn set_line(&mut self, index: usize, text: String) {
        if let Some(slot) = self.get_mut(index) {
            *slot = text;
        }
    }

    fn replace_range(&mut self, range: Range<usize>, lines: Vec<String>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.splice(start..end, lines);
    }
}

/// An owned document that remembers how each line was terminated.
///
/// Lines added by edits take the ending of the document's first line. The
/// last line keeps whatever the document ended with, including nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    /// `endings[i]` terminates `lines[i]`; only the last may be empty
    endings: Vec<&'static str>,
    line_ending: &'static str,
}

impl Document {
    /// Split `content` into a document
    pub fn parse(content: &str) -> Self {
        let (lines, endings) = split_lines(content);
        Self {
            lines,
            endings,
            line_ending: detect_line_ending(content),
        }
    }

    /// Build a document from lines, using `\n` and a trailing newline
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            endings: vec!["\n"; lines.len()],
            lines,
            line_ending: "\n",
        }
    }

    /// Borrow the lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the document, returning its lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Render the document back to text
    pub fn content(&self) -> String {
        join_lines(&self.lines, &self.endings)
    }
}

impl TextBuffer for Document {
    fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.line(index)
    }

    fn set_line(&mut self, index: usize, text: String) {
        self.lines.set_line(index, text);
    }

    fn replace_range(&mut self, range: Range<usize>, lines: Vec<String>) {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        let ending = self.line_ending;
        let final_ending = self.endings.last().copied().unwrap_or_default();

        let count = lines.len();
        self.lines.splice(start..end, lines);
        self.endings.splice(start..end, std::iter::repeat_n(ending, count));

        // A former last line may now be followed by others, and the new last
        // line inherits the document's final terminator.
        if let Some((last, rest)) = self.endings.split_last_mut() {
            for e in rest.iter_mut().filter(|e| e.is_empty()) {
                *e = ending;
            }
            *last = final_ending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replace_range_changes_length() {
        let mut b = buf(&["a", "b", "c", "d"]);
        b.replace_range(1..3, buf(&["x"]));
        assert_eq!(b, buf(&["a", "x", "d"]));
        b.replace_range(1..2, buf(&["y", "z", "w"]));
        assert_eq!(b, buf(&["a", "y", "z", "w", "d"]));
    }

    #[test]
    fn test_insert_lines_at_end() {
        let mut b = buf(&["a"]);
        b.insert_lines(1, buf(&["b", "c"]));
        assert_eq!(b, buf(&["a", "b", "c"]));
        b.insert_lines(0, buf(&["top"]));
        assert_eq!(b.line(0), Some("top"));
    }

    #[test]
    fn test_set_line_out_of_range_is_ignored() {
        let mut b = buf(&["a"]);
        b.set_line(5, "x".to_string());
        assert_eq!(b, buf(&["a"]));
    }

    #[test]
    fn test_lines_in() {
        let b = buf(&["a", "b", "c"]);
        assert_eq!(b.lines_in(1..3), buf(&["b", "c"]));
        assert_eq!(b.to_lines(), b);
    }

    #[test]
    fn test_document_preserves_crlf() {
        let mut doc = Document::parse("# A\r\ntext\r\n");
        assert_eq!(doc.line_count(), 2);
        doc.set_line(0, "# B".to_string());
        assert_eq!(doc.content(), "# B\r\ntext\r\n");
    }

    #[test]
    fn test_document_without_trailing_newline() {
        let doc = Document::parse("# A\ntext");
        assert_eq!(doc.content(), "# A\ntext");
    }

    #[test]
    fn test_document_keeps_mixed_endings() {
        let mut doc = Document::parse("# A\r\n\n## B\n## C\n");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line(2), Some("## B"));
        doc.set_line(3, "## D".to_string());
        assert_eq!(doc.content(), "# A\r\n\n## B\n## D\n");
    }

    #[test]
    fn test_document_insert_uses_first_ending() {
        let mut doc = Document::parse("# A\r\ntext\n");
        doc.insert_lines(1, buf(&["x"]));
        assert_eq!(doc.content(), "# A\r\nx\r\ntext\n");
    }

    #[test]
    fn test_document_append_after_unterminated_line() {
        let mut doc = Document::parse("a");
        doc.insert_lines(1, buf(&["b"]));
        assert_eq!(doc.content(), "a\nb");
        doc.replace_range(1..2, Vec::new());
        assert_eq!(doc.content(), "a");
    }

    #[test]
    fn test_document_from_lines() {
        let doc = Document::from_lines(buf(&["# A", "text"]));
        assert_eq!(doc.content(), "# A\ntext\n");
        assert_eq!(doc.into_lines(), buf(&["# A", "text"]));
    }
}
