//! JSON output formatter

use crate::types::{HeadingRecord, Outcome, RunResults};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_number: Option<usize>,
    headings: &'a [HeadingRecord],
}

/// Format run results as JSON, keyed by document name
pub fn format_json(results: &RunResults) -> String {
    let reports: BTreeMap<&str, JsonReport<'_>> = results
        .results
        .iter()
        .map(|(name, report)| {
            let (error, line_number) = match &report.outcome {
                Outcome::Failed(err) => (Some(err.to_string()), err.line_number()),
                _ => (None, None),
            };
            (
                name.as_str(),
                JsonReport {
                    outcome: report.outcome.label(),
                    error,
                    line_number,
                    headings: &report.headings,
                },
            )
        })
        .collect();

    serde_json::to_string_pretty(&reports).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize results: {}\"}}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ops::process_content;
    use crate::types::Action;

    #[test]
    fn test_format_json_empty() {
        let results = RunResults::new();
        let parsed: serde_json::Value = serde_json::from_str(&format_json(&results)).unwrap();
        assert!(parsed.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_format_json_headings() {
        let mut results = RunResults::new();
        results.add(
            "doc.md".to_string(),
            process_content("## Intro\n### Setup\n", Action::Outline, &Config::default()),
        );
        let parsed: serde_json::Value = serde_json::from_str(&format_json(&results)).unwrap();
        let doc = &parsed["doc.md"];
        assert_eq!(doc["outcome"], "unchanged");
        assert_eq!(doc["headings"][1]["section_number"], "1.1");
        assert_eq!(doc["headings"][1]["anchor"], "#setup");
        assert_eq!(doc["headings"][1]["relative_level"], 2);
        assert!(doc.get("error").is_none());
    }

    #[test]
    fn test_format_json_failure() {
        let mut results = RunResults::new();
        results.add(
            "bad.md".to_string(),
            process_content("## A\n# B\n", Action::AddNumbers, &Config::default()),
        );
        let parsed: serde_json::Value = serde_json::from_str(&format_json(&results)).unwrap();
        assert_eq!(parsed["bad.md"]["outcome"], "failed");
        assert_eq!(parsed["bad.md"]["line_number"], 2);
    }
}
