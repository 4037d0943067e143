//! Helper utilities

use std::collections::HashSet;

/// Detect line ending style from the first terminated line
pub fn detect_line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(pos) if content[..pos].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Convert heading text to a GitHub-style anchor, including the leading `#`.
///
/// Rules: lowercase, spaces become hyphens, periods are dropped. Nothing
/// else is stripped, so a numeric prefix like `1.2 ` becomes `12-`.
///
/// # Examples
/// ```
/// assert_eq!(mkdtoc::helpers::gfm_anchor("Getting Started"), "#getting-started");
/// assert_eq!(mkdtoc::helpers::gfm_anchor("1.2 Setup"), "#12-setup");
/// ```
pub fn gfm_anchor(title: &str) -> String {
    let mut anchor = String::with_capacity(title.len() + 1);
    anchor.push('#');
    for ch in title.to_lowercase().chars() {
        match ch {
            ' ' => anchor.push('-'),
            '.' => {}
            _ => anchor.push(ch),
        }
    }
    anchor
}

/// Anchors handed out during one index pass.
///
/// A repeated anchor gets the first free `-1`, `-2`, ... suffix.
#[derive(Debug, Default)]
pub struct AnchorSet {
    seen: HashSet<String>,
}

impl AnchorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `anchor`, returning it or its first unused suffixed form
    pub fn claim(&mut self, anchor: String) -> String {
        let mut candidate = anchor.clone();
        let mut n = 1;
        while self.seen.contains(&candidate) {
            candidate = format!("{}-{}", anchor, n);
            n += 1;
        }
        self.seen.insert(candidate.clone());
        candidate
    }

    /// Number of anchors claimed so far
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no anchor has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Split content into lines, dropping the line terminators.
///
/// Each line's own terminator (`"\n"` or `"\r\n"`) is returned alongside
/// it; the last one is empty when the content does not end with a newline.
/// [`join_lines`] restores the original bytes.
pub fn split_lines(content: &str) -> (Vec<String>, Vec<&'static str>) {
    let mut lines = Vec::new();
    let mut endings = Vec::new();
    for chunk in content.split_inclusive('\n') {
        let (line, ending) = if let Some(line) = chunk.strip_suffix("\r\n") {
            (line, "\r\n")
        } else if let Some(line) = chunk.strip_suffix('\n') {
            (line, "\n")
        } else {
            (chunk, "")
        };
        lines.push(line.to_string());
        endings.push(ending);
    }
    (lines, endings)
}

/// Inverse of [`split_lines`]
pub fn join_lines(lines: &[String], endings: &[&str]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for (index, line) in lines.iter().enumerate() {
        out.push_str(line);
        out.push_str(endings.get(index).copied().unwrap_or_default());
    }
    out
}
