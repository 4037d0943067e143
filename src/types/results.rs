//! Run results types

use crate::types::{Error, HeadingRecord};
use std::collections::HashMap;
use std::fmt;

/// What happened to one document
#[derive(Debug)]
pub enum Outcome {
    /// The edit changed the document
    Changed,

    /// The edit ran but produced identical content
    Unchanged,

    /// Update or removal found no TOC block; the document is left as is
    TocNotFound,

    /// Indexing failed; the document is left as is
    Failed(Error),
}

impl Outcome {
    /// Short lowercase name, as used in JSON output
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Changed => "changed",
            Outcome::Unchanged => "unchanged",
            Outcome::TocNotFound => "toc-not-found",
            Outcome::Failed(_) => "failed",
        }
    }
}

/// Report for a single document
#[derive(Debug)]
pub struct FileReport {
    /// Content as read
    pub original: String,

    /// Content after the action (equal to `original` unless changed)
    pub updated: String,

    /// Heading index of the final content (empty when indexing failed)
    pub headings: Vec<HeadingRecord>,

    /// Outcome of the action
    pub outcome: Outcome,
}

impl FileReport {
    /// Whether the document content changed
    pub fn is_changed(&self) -> bool {
        matches!(self.outcome, Outcome::Changed)
    }

    /// The error that stopped the action, if any
    pub fn error(&self) -> Option<&Error> {
        match &self.outcome {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Results from a run
#[derive(Debug, Default)]
pub struct RunResults {
    /// Map of file/string name to its report
    pub results: HashMap<String, FileReport>,
}

impl RunResults {
    /// Create a new empty RunResults
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the report for a file or string
    pub fn add(&mut self, name: String, report: FileReport) {
        self.results.insert(name, report);
    }

    /// Get the report for a specific file or string
    pub fn get(&self, name: &str) -> Option<&FileReport> {
        self.results.get(name)
    }

    /// Names in sorted order, for stable output
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.results.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of documents whose content changed
    pub fn changed_count(&self) -> usize {
        self.results.values().filter(|r| r.is_changed()).count()
    }

    /// Number of documents that failed to index
    pub fn failure_count(&self) -> usize {
        self.results
            .values()
            .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
            .count()
    }

    /// Number of documents with no TOC to update or remove
    pub fn toc_missing_count(&self) -> usize {
        self.results
            .values()
            .filter(|r| matches!(r.outcome, Outcome::TocNotFound))
            .count()
    }

    /// Whether any document failed or lacked a TOC
    pub fn has_problems(&self) -> bool {
        self.failure_count() > 0 || self.toc_missing_count() > 0
    }
}

impl fmt::Display for RunResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        for name in self.names() {
            let Some(report) = self.results.get(name) else {
                continue;
            };
            match &report.outcome {
                Outcome::Failed(err) => lines.push(format!("{}: {}", name, err)),
                Outcome::TocNotFound => lines.push(format!("{}: {}", name, Error::TocNotFound)),
                Outcome::Changed | Outcome::Unchanged => {}
            }
        }
        write!(f, "{}", lines.join("\n"))
    }
}
