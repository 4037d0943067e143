//! Document-level operations
//!
//! Each entry point indexes the whole document before touching it, so a
//! numbering error never leaves a document half edited. Edits that change
//! heading text re-index before regenerating the TOC, since titles and
//! anchors shift with them.

use crate::buffer::{Document, TextBuffer};
use crate::config::{Config, ConfigProvider};
use crate::editor;
use crate::index::DocumentIndex;
use crate::toc;
use crate::types::{Action, Error, FileReport, Outcome, Result, RunOptions, RunResults};
use rayon::prelude::*;
use std::ops::Range;

/// What a numbering edit did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingSummary {
    /// Heading lines rewritten
    pub lines_changed: usize,

    /// Range of the regenerated TOC, when the document had one
    pub toc: Option<Range<usize>>,
}

fn renumber<B, C>(buffer: &mut B, config: &C, with_numbers: bool) -> Result<NumberingSummary>
where
    B: TextBuffer + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let index = DocumentIndex::build(buffer)?;
    let lines_changed = if with_numbers {
        editor::add_numbers(buffer, &index.headings)
    } else {
        editor::remove_numbers(buffer, &index.headings)
    };

    let toc = if toc::find_toc(buffer).is_some() {
        let index = DocumentIndex::build(buffer)?;
        Some(toc::update_toc(buffer, &index.headings, config.toc_levels())?)
    } else {
        None
    };

    Ok(NumberingSummary { lines_changed, toc })
}

/// Number every heading, refreshing the TOC if the document has one
pub fn add_numbers<B, C>(buffer: &mut B, config: &C) -> Result<NumberingSummary>
where
    B: TextBuffer + ?Sized,
    C: ConfigProvider + ?Sized,
{
    renumber(buffer, config, true)
}

/// Strip heading numbers, refreshing the TOC if the document has one
pub fn remove_numbers<B, C>(buffer: &mut B, config: &C) -> Result<NumberingSummary>
where
    B: TextBuffer + ?Sized,
    C: ConfigProvider + ?Sized,
{
    renumber(buffer, config, false)
}

/// Insert a TOC before the 0-based line `at`
pub fn add_toc<B, C>(buffer: &mut B, config: &C, at: usize) -> Result<Range<usize>>
where
    B: TextBuffer + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let index = DocumentIndex::build(buffer)?;
    toc::insert_toc(buffer, &index.headings, config.toc_levels(), at)
}

/// Regenerate the existing TOC
pub fn update_toc<B, C>(buffer: &mut B, config: &C) -> Result<Range<usize>>
where
    B: TextBuffer + ?Sized,
    C: ConfigProvider + ?Sized,
{
    let index = DocumentIndex::build(buffer)?;
    toc::update_toc(buffer, &index.headings, config.toc_levels())
}

/// Replace the existing TOC with a blank line
pub fn remove_toc<B: TextBuffer + ?Sized>(buffer: &mut B) -> Result<()> {
    toc::remove_toc(buffer)
}

/// Run `action` against one buffer
pub fn apply<B, C>(action: Action, buffer: &mut B, config: &C) -> Result<()>
where
    B: TextBuffer + ?Sized,
    C: ConfigProvider + ?Sized,
{
    match action {
        Action::AddNumbers => add_numbers(buffer, config).map(|_| ()),
        Action::RemoveNumbers => remove_numbers(buffer, config).map(|_| ()),
        Action::AddToc { line } => add_toc(buffer, config, line).map(|_| ()),
        Action::UpdateToc => update_toc(buffer, config).map(|_| ()),
        Action::RemoveToc => remove_toc(buffer),
        Action::Outline => DocumentIndex::build(buffer).map(|_| ()),
    }
}

/// Apply `action` to a piece of content, never failing
pub fn process_content(content: &str, action: Action, config: &Config) -> FileReport {
    let mut doc = Document::parse(content);
    let outcome = match apply(action, &mut doc, config) {
        Ok(()) if doc.content() == content => Outcome::Unchanged,
        Ok(()) => Outcome::Changed,
        Err(Error::TocNotFound) => Outcome::TocNotFound,
        Err(e) => Outcome::Failed(e),
    };

    let updated = match outcome {
        Outcome::Changed => doc.content(),
        _ => content.to_string(),
    };
    let headings = match outcome {
        Outcome::Failed(_) => Vec::new(),
        _ => DocumentIndex::build(&Document::parse(&updated))
            .map(|index| index.headings)
            .unwrap_or_default(),
    };

    FileReport {
        original: content.to_string(),
        updated,
        headings,
        outcome,
    }
}

/// Process files and strings synchronously
///
/// Files are read sequentially (for proper error reporting) then processed
/// in parallel using rayon; each document is handled on a single thread.
pub fn run_sync(options: &RunOptions) -> Result<RunResults> {
    let mut results = RunResults::new();
    let config = load_config(options)?;

    let mut inputs: Vec<(String, String)> = Vec::new();
    for file_path in &options.files {
        let content = std::fs::read_to_string(file_path)
            .map_err(|_| Error::FileNotFound(file_path.clone()))?;
        inputs.push((file_path.clone(), content));
    }
    for (name, content) in &options.strings {
        inputs.push((name.clone(), content.clone()));
    }

    let reports: Vec<(String, FileReport)> = inputs
        .par_iter()
        .map(|(name, content)| {
            let report = process_content(content, options.action, &config);
            if let Outcome::Failed(e) = &report.outcome {
                log::debug!("{}: {}", name, e);
            }
            (name.clone(), report)
        })
        .collect();

    for (name, report) in reports {
        results.add(name, report);
    }

    log::debug!(
        "{:?}: {} input(s), {} changed",
        options.action,
        results.results.len(),
        results.changed_count()
    );
    Ok(results)
}

fn load_config(options: &RunOptions) -> Result<Config> {
    let config = if let Some(config) = &options.config {
        config.clone()
    } else if let Some(config_file) = &options.config_file {
        Config::from_file(config_file)?.resolve_extends()?
    } else {
        Config::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    const ALL: [usize; 0] = [];

    #[test]
    fn test_add_numbers_refreshes_toc() {
        let mut lines = doc(&["# A", "", "* [A](#a)", "    * [B](#b)", "", "## B"]);
        let summary = add_numbers(&mut lines, &ALL[..]).unwrap();
        assert_eq!(summary.lines_changed, 2);
        assert_eq!(summary.toc, Some(2..4));
        assert_eq!(
            lines,
            doc(&[
                "# 1 A",
                "",
                "* [1 A](#1-a)",
                "    * [1.1 B](#11-b)",
                "",
                "## 1.1 B"
            ])
        );
    }

    #[test]
    fn test_remove_numbers_refreshes_toc() {
        let mut lines = doc(&["# 1 A", "* [1 A](#1-a)", "    * [1.1 B](#11-b)", "## 1.1 B"]);
        remove_numbers(&mut lines, &ALL[..]).unwrap();
        assert_eq!(lines, doc(&["# A", "* [A](#a)", "    * [B](#b)", "## B"]));
    }

    #[test]
    fn test_add_numbers_without_toc() {
        let mut lines = doc(&["# A", "## B"]);
        let summary = add_numbers(&mut lines, &ALL[..]).unwrap();
        assert_eq!(summary.toc, None);
        assert_eq!(lines, doc(&["# 1 A", "## 1.1 B"]));
    }

    #[test]
    fn test_numbering_error_leaves_document() {
        let original = doc(&["# A", "### C", "* [A](#a)"]);
        let mut lines = original.clone();
        let err = add_numbers(&mut lines, &ALL[..]).unwrap_err();
        assert_eq!(err.line_number(), Some(2));
        assert_eq!(lines, original);
    }

    #[test]
    fn test_update_toc_uses_level_filter() {
        let mut lines = doc(&["# A", "## B", "### C", "", "* [A](#a)"]);
        update_toc(&mut lines, &vec![1usize, 2]).unwrap();
        assert_eq!(
            lines,
            doc(&["# A", "## B", "### C", "", "* [A](#a)", "    * [B](#b)"])
        );
    }

    #[test]
    fn test_update_toc_twice_is_stable() {
        let mut lines = doc(&["# A", "* [A](#a)", "", "## B", "## B"]);
        update_toc(&mut lines, &ALL[..]).unwrap();
        let once = lines.clone();
        update_toc(&mut lines, &ALL[..]).unwrap();
        assert_eq!(lines, once);
    }

    #[test]
    fn test_process_content_outcomes() {
        let config = Config::default();
        let report = process_content("# A\n", Action::AddNumbers, &config);
        assert!(report.is_changed());
        assert_eq!(report.updated, "# 1 A\n");
        assert_eq!(report.headings[0].title, "1 A");

        let report = process_content("# A\n", Action::UpdateToc, &config);
        assert!(matches!(report.outcome, Outcome::TocNotFound));
        assert_eq!(report.updated, "# A\n");

        let report = process_content("# A\n### B\n", Action::AddNumbers, &config);
        assert!(report.error().is_some());
        assert_eq!(report.updated, report.original);
        assert!(report.headings.is_empty());

        let report = process_content("# A\n", Action::Outline, &config);
        assert!(matches!(report.outcome, Outcome::Unchanged));
        assert_eq!(report.headings.len(), 1);
    }

    #[test]
    fn test_run_sync_strings() {
        let options = RunOptions::new(Action::AddToc { line: 0 })
            .with_string("a", "# A\n## B\n")
            .with_string("b", "# Only\n");
        let results = run_sync(&options).unwrap();
        assert_eq!(results.changed_count(), 2);
        assert_eq!(
            results.get("a").unwrap().updated,
            "* [A](#a)\n    * [B](#b)\n# A\n## B\n"
        );
    }

    #[test]
    fn test_run_sync_missing_file() {
        let options = RunOptions::new(Action::Outline).with_file("/nonexistent/file.md");
        assert!(matches!(
            run_sync(&options),
            Err(Error::FileNotFound(_))
        ));
    }

    #[test]
    fn test_run_sync_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("toc.json");
        std::fs::write(&config_path, r#"{"toc_levels": [1]}"#).unwrap();
        let options = RunOptions::new(Action::AddToc { line: 2 })
            .with_config_file(config_path.to_string_lossy())
            .with_string("doc", "# A\n## B\n");
        let results = run_sync(&options).unwrap();
        assert_eq!(results.get("doc").unwrap().updated, "# A\n## B\n* [A](#a)\n");
    }
}
