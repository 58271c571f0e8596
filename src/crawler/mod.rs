//! Crawler module: proxy selection, fetching, and result extraction
//!
//! This module contains the search pipeline:
//! - Random proxy selection for every outbound request
//! - Single-GET HTTP fetching with absence-on-failure semantics
//! - Typed extraction of result records from the search payload
//! - Language statistics scraping for repository results
//! - Overall orchestration

mod coordinator;
mod extractor;
mod fetcher;
mod languages;
mod proxy;

pub use coordinator::{Crawler, DEFAULT_BASE_URL};
pub use extractor::{extract, RepoExtra, ResultRecord, SearchPayload};
pub use fetcher::{FetchedPage, Fetcher};
pub use languages::{extract_language_stats, LanguageStats};
pub use proxy::ProxySelector;

use crate::config::SearchInput;
use crate::OctoseekError;

/// Runs a complete search for the given input
///
/// Convenience entry point: builds a crawler from the input's proxy list
/// and runs one search.
///
/// # Arguments
///
/// * `input` - Validated search input
///
/// # Returns
///
/// * `Ok(Vec<ResultRecord>)` - Extracted records, possibly empty
/// * `Err(OctoseekError)` - Failed to construct the crawler
pub async fn search(input: &SearchInput) -> Result<Vec<ResultRecord>, OctoseekError> {
    let mut crawler = Crawler::new(&input.proxies)?;
    Ok(crawler.search(&input.keywords, input.kind).await)
}
