//! Output formatters for heading outlines and run results

mod github;
mod json;
mod text;

pub use github::format_github;
pub use json::format_json;
pub use text::{format_outline, format_text};
