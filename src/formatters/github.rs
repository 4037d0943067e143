//! GitHub Actions workflow command formatter
//!
//! Outputs problems as GitHub Actions annotation commands, which runners
//! display as PR annotations in the Files Changed view:
//! `::error file={file},line={line},title=mkdtoc::{message}`

use crate::types::{Error, Outcome, RunResults};

/// Format numbering failures and missing TOCs as workflow annotations.
///
/// Documents that were processed cleanly produce no output.
pub fn format_github(results: &RunResults) -> String {
    let mut lines: Vec<String> = Vec::new();

    for name in results.names() {
        let Some(report) = results.get(name) else {
            continue;
        };
        match &report.outcome {
            Outcome::Failed(Error::Numbering { line, source }) => lines.push(format!(
                "::error file={},line={},title=mkdtoc::{}",
                name, line, source
            )),
            Outcome::Failed(err) => {
                lines.push(format!("::error file={},title=mkdtoc::{}", name, err));
            }
            Outcome::TocNotFound => {
                lines.push(format!(
                    "::warning file={},title=mkdtoc::{}",
                    name,
                    Error::TocNotFound
                ));
            }
            Outcome::Changed | Outcome::Unchanged => {}
        }
    }

    lines.join("\n")
}
