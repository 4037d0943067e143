//! Core type definitions for mkdtoc

mod error;
mod heading;
mod options;
mod results;

pub use error::*;
pub use heading::*;
pub use options::*;
pub use results::*;
