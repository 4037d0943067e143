//! Error types for mkdtoc

/// Why a heading could not be given a section number.
///
/// Produced by [`SectionNumberer`](crate::numbering::SectionNumberer) without
/// any line information; the indexer attaches the line when it propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumberingError {
    /// The heading is shallower than the first heading of the document
    #[error("heading level {level} is above the document's top level {baseline}")]
    OutOfRange {
        /// Marker count of the offending heading
        level: usize,
        /// Marker count of the first heading in the document
        baseline: usize,
    },

    /// The heading skips an intermediate level
    #[error("heading level {level} skips level {parent}")]
    SkipLevel {
        /// Relative level of the offending heading
        level: usize,
        /// Relative level that has no heading yet
        parent: usize,
    },
}

/// Main error type for mkdtoc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A heading could not be numbered; the whole pass is aborted
    #[error("line {line}: {source}")]
    Numbering {
        /// Line number (1-based) of the offending heading
        line: usize,
        /// What went wrong
        #[source]
        source: NumberingError,
    },

    /// Update or removal was requested but no TOC block exists
    #[error("TOC not found or corrupted")]
    TocNotFound,

    /// A TOC insert position lies past the end of the document
    #[error("line {line} is past the end of the document ({len} lines)")]
    LineOutOfRange {
        /// Requested 0-based insert index
        line: usize,
        /// Number of lines in the document
        len: usize,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl Error {
    /// 1-based line number the error points at, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Error::Numbering { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Soft failures leave the document untouched but are not crashes
    pub fn is_soft(&self) -> bool {
        matches!(self, Error::TocNotFound)
    }
}

/// Result type alias for mkdtoc operations
pub type Result<T> = std::result::Result<T, Error>;
