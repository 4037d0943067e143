//! # mkdtoc
//!
//! Section numbering and table-of-contents maintenance for Markdown files.
//!
//! ## Features
//!
//! - **Heading detection** that ignores `#` lines inside fenced and indented code
//! - **Outline numbering** (`1`, `1.1`, `1.2`, `2`, ...) relative to the first heading
//! - **TOC generation** with GitHub-style anchors, de-duplicated per document
//! - **TOC synchronization**: an existing TOC is found and regenerated in place
//! - **Configuration** via JSON, YAML, or TOML files
//! - **Parallel batch processing** of many documents
//!
//! ## Quick Start
//!
//! ```rust
//! use mkdtoc::{Document, ops};
//!
//! let mut doc = Document::parse("# Guide\n\n## Install\n\n## Usage\n");
//! ops::add_toc(&mut doc, &mkdtoc::Config::default(), 1)?;
//! ops::add_numbers(&mut doc, &mkdtoc::Config::default())?;
//! assert_eq!(
//!     doc.content(),
//!     "# 1 Guide\n* [1 Guide](#1-guide)\n    * [1.1 Install](#11-install)\n    \
//!      * [1.2 Usage](#12-usage)\n\n## 1.1 Install\n\n## 1.2 Usage\n"
//! );
//! # Ok::<(), mkdtoc::Error>(())
//! ```
//!
//! ## Batch API
//!
//! ```rust,no_run
//! use mkdtoc::{Action, RunOptions, run_sync};
//!
//! let options = RunOptions::new(Action::UpdateToc).with_file("README.md");
//! let results = run_sync(&options)?;
//! println!("{} file(s) changed", results.changed_count());
//! # Ok::<(), mkdtoc::Error>(())
//! ```
//!
//! ## Configuration
//!
//! Only the TOC levels are configurable. Levels are relative: `1` is the
//! level of the first heading in the document.
//!
//! ```json
//! {
//!   "toc_levels": [1, 2]
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod classifier;
pub mod config;
pub mod editor;
pub mod formatters;
pub mod helpers;
pub mod index;
pub mod numbering;
pub mod ops;
pub mod toc;
pub mod types;

// Re-export main types and functions
pub use buffer::{Document, TextBuffer};
pub use config::{Config, ConfigProvider};
pub use index::{DocumentIndex, build_index};
pub use ops::{process_content, run_sync};
pub use types::{
    Action, Error, FileReport, HeadingRecord, NumberingError, Outcome, Result, RunOptions,
    RunResults,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
