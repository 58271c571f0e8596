//! Octoseek: a proxied GitHub search crawler
//!
//! This crate queries the GitHub search endpoint for a keyword set, extracts
//! typed result records (repositories, issues, or wiki pages) from the JSON
//! payload, and optionally enriches repository results with the per-language
//! breakdown scraped from each repository's landing page.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Octoseek operations
#[derive(Debug, Error)]
pub enum OctoseekError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse input JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid proxy URL: {0}")]
    InvalidProxy(String),
}

/// Result type alias for Octoseek operations
pub type Result<T> = std::result::Result<T, OctoseekError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{ResultKind, SearchInput, SearchQuery};
pub use crawler::{Crawler, LanguageStats, ResultRecord};
