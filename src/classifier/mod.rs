//! Line classification
//!
//! [`LineClassifier`] is fed every line of a document in order and reports
//! the heading level of each (0 for anything that is not a heading). It keeps
//! track of fenced and indented code blocks so that `#` comments inside code
//! are never taken for headings.

use regex::Regex;
use std::sync::LazyLock;

/// Optional indent, a run of `#`, then at least one more character
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#+)(.+)$").expect("valid regex"));

static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```[^`]*$").expect("valid regex"));

static FENCE_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```\s*$").expect("valid regex"));

/// Split a heading line into its level and raw (untrimmed) title.
///
/// This only looks at the shape of the line; whether it sits inside a code
/// block is the classifier's business.
///
/// # Examples
/// ```
/// use mkdtoc::classifier::split_heading;
/// assert_eq!(split_heading("## Setup"), Some((2, " Setup")));
/// assert_eq!(split_heading("#"), None);
/// ```
pub fn split_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let title = caps.get(2)?.as_str();
    Some((level, title))
}

/// Whether a line starts an indented code block: four spaces, or up to
/// three spaces and a tab, followed by something other than whitespace.
pub fn is_indented_code(line: &str) -> bool {
    let rest = if let Some(rest) = line.strip_prefix("    ") {
        rest
    } else {
        let spaces = line.len() - line.trim_start_matches(' ').len();
        if spaces > 3 {
            return false;
        }
        match line[spaces..].strip_prefix('\t') {
            Some(rest) => rest,
            None => return false,
        }
    };
    !rest.trim().is_empty()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Where the classifier currently is in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Ordinary text
    #[default]
    Normal,
    /// Inside a block indented by four spaces or a tab
    IndentedCode,
    /// Between ``` fences
    FencedCode,
}

/// Stateful heading detector for one pass over a document
#[derive(Debug, Clone)]
pub struct LineClassifier {
    mode: Mode,
    previous_line_empty: bool,
    previous_line_was_heading: bool,
}

impl Default for LineClassifier {
    fn default() -> Self {
        // The start of a document counts as following a blank line.
        Self {
            mode: Mode::Normal,
            previous_line_empty: true,
            previous_line_was_heading: false,
        }
    }
}

impl LineClassifier {
    /// Create a classifier positioned at the start of a document
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Return to the start-of-document state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Consume the next line, returning its heading level or 0
    pub fn classify(&mut self, line: &str) -> usize {
        if is_blank(line) {
            if self.mode == Mode::Normal {
                self.previous_line_empty = true;
            }
            return 0;
        }

        match self.mode {
            Mode::Normal => self.classify_normal(line),
            Mode::IndentedCode => {
                if is_indented_code(line) {
                    return 0;
                }
                // The block ended; this line may itself open a fence or be a heading.
                self.mode = Mode::Normal;
                self.classify_normal(line)
            }
            Mode::FencedCode => {
                if FENCE_CLOSE_RE.is_match(line) {
                    self.mode = Mode::Normal;
                }
                0
            }
        }
    }

    fn classify_normal(&mut self, line: &str) -> usize {
        if FENCE_OPEN_RE.is_match(line) {
            self.mode = Mode::FencedCode;
            self.clear_context();
            return 0;
        }

        if (self.previous_line_empty || self.previous_line_was_heading) && is_indented_code(line) {
            self.mode = Mode::IndentedCode;
            self.clear_context();
            return 0;
        }

        if let Some((level, _)) = split_heading(line) {
            self.previous_line_empty = false;
            self.previous_line_was_heading = true;
            return level;
        }

        self.clear_context();
        0
    }

    fn clear_context(&mut self) {
        self.previous_line_empty = false;
        self.previous_line_was_heading = false;
    }
}
