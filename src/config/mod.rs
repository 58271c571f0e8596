//! Configuration module for Octoseek
//!
//! This module handles loading, parsing, and validating the JSON input file
//! that drives a search run (keywords, result kind, proxy endpoints).
//!
//! # Example
//!
//! ```no_run
//! use octoseek::config::load_input;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("input.json")).unwrap();
//! println!("Result kind: {}", input.kind);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ResultKind, SearchInput, SearchQuery};

// Re-export parser functions
pub use parser::load_input;
