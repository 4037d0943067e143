//! Options for configuring a run over one or more documents

use crate::config::Config;
use std::collections::HashMap;

/// The edit to perform on every input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Insert section numbers after each heading marker
    AddNumbers,

    /// Strip section numbers from each heading
    RemoveNumbers,

    /// Insert a freshly built TOC before the given 0-based line
    AddToc {
        /// Insert position (0-based line index)
        line: usize,
    },

    /// Regenerate the existing TOC block
    UpdateToc,

    /// Replace the existing TOC block with a blank line
    RemoveToc,

    /// Build the heading index only, leaving the document untouched
    #[default]
    Outline,
}

impl Action {
    /// Whether this action may change document content
    pub fn is_edit(&self) -> bool {
        !matches!(self, Action::Outline)
    }
}

/// Options for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Files to process (paths)
    pub files: Vec<String>,

    /// Strings to process (keyed by identifier)
    pub strings: HashMap<String, String>,

    /// Configuration object
    pub config: Option<Config>,

    /// Path to configuration file
    pub config_file: Option<String>,

    /// What to do with each document
    pub action: Action,
}

impl RunOptions {
    /// Create a new RunOptions with default values
    pub fn new(action: Action) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }

    /// Add a file to process
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Add multiple files to process
    pub fn with_files(mut self, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Add a string to process
    pub fn with_string(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.strings.insert(name.into(), content.into());
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the configuration file path
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = RunOptions::new(Action::UpdateToc)
            .with_file("README.md")
            .with_files(["a.md", "b.md"])
            .with_string("inline", "# Title\n");
        assert_eq!(options.files, vec!["README.md", "a.md", "b.md"]);
        assert_eq!(options.strings.len(), 1);
        assert_eq!(options.action, Action::UpdateToc);
        assert!(options.config.is_none());
    }

    #[test]
    fn test_outline_is_not_an_edit() {
        assert!(!Action::Outline.is_edit());
        assert!(Action::AddToc { line: 0 }.is_edit());
    }
}
