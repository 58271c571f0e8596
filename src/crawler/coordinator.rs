//! Crawl orchestration
//!
//! The coordinator wires the pipeline together: build the search URL,
//! fetch it through a proxy, deserialize the payload, extract records of
//! the requested kind, and for repository results fetch each landing page
//! to attach its language statistics. One linear pass, no retries.

use crate::config::{ResultKind, SearchQuery};
use crate::crawler::extractor::{extract, ResultRecord, SearchPayload};
use crate::crawler::fetcher::Fetcher;
use crate::crawler::languages::extract_language_stats;
use crate::crawler::proxy::ProxySelector;
use crate::OctoseekError;

/// Default base URL for search and repository pages
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// The search crawler
///
/// Owns the proxied fetcher and the base URL. Every search runs the same
/// linear pipeline; partial failures degrade to fewer (or zero) records
/// and are observable only through logs.
pub struct Crawler {
    fetcher: Fetcher,
    base_url: String,
}

impl Crawler {
    /// Creates a crawler routing requests through the given proxies
    ///
    /// # Arguments
    ///
    /// * `proxies` - Non-empty list of proxy endpoint URLs
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to search
    /// * `Err(OctoseekError)` - Empty proxy list or client build failure
    pub fn new(proxies: &[String]) -> Result<Self, OctoseekError> {
        let fetcher = Fetcher::new(proxies)?;
        tracing::info!(proxies = proxies.len(), "Initialized crawler");
        Ok(Self {
            fetcher,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Creates a crawler with a custom base URL and a seeded proxy
    /// selector, for tests against a mock server
    pub fn with_base_url(
        proxies: &[String],
        base_url: &str,
        seed: u64,
    ) -> Result<Self, OctoseekError> {
        let selector = ProxySelector::seeded(proxies.to_vec(), seed)?;
        let fetcher = Fetcher::with_selector(proxies, selector)?;
        Ok(Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Runs a search and returns the extracted records in payload order
    ///
    /// An absent response or an undeserializable body yields an empty
    /// list; both are logged, neither is fatal.
    pub async fn search(&mut self, keywords: &[String], kind: ResultKind) -> Vec<ResultRecord> {
        let query = SearchQuery::new(keywords.to_vec(), kind);
        let url = query.search_url(&self.base_url);
        tracing::info!(%url, keywords = ?keywords, kind = %kind, "Searching");

        let page = match self.fetcher.get(&url).await {
            Some(page) => page,
            None => return Vec::new(),
        };

        let payload: SearchPayload = match serde_json::from_str(&page.body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "Failed to decode search response");
                return Vec::new();
            }
        };

        let mut records = extract(kind, &payload, &self.base_url);

        if kind == ResultKind::Repositories {
            self.enrich_repositories(&mut records).await;
        }

        records
    }

    /// Attaches language statistics to each repository record
    ///
    /// Fetches are sequential and order-preserving. A failed fetch leaves
    /// the record in place with empty stats.
    async fn enrich_repositories(&mut self, records: &mut [ResultRecord]) {
        for record in records.iter_mut() {
            if let ResultRecord::Repository { url, extra } = record {
                let body = self
                    .fetcher
                    .get(url)
                    .await
                    .map(|page| page.body)
                    .unwrap_or_default();
                extra.language_stats = extract_language_stats(&body);
            }
        }
    }
}
