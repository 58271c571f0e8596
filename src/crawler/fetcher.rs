//! Proxied HTTP fetcher
//!
//! This module handles all HTTP requests for the crawler. Each request is
//! routed through a randomly selected proxy endpoint. Any transport failure
//! or non-2xx status collapses to an absent response at this boundary;
//! callers treat an absent response as "skip this item", never as fatal.

use crate::crawler::proxy::ProxySelector;
use crate::OctoseekError;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("octoseek/", env!("CARGO_PKG_VERSION"));

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// HTTP status code (always 2xx)
    pub status: u16,
    /// Response body
    pub body: String,
}

/// One reqwest client bound to one proxy endpoint
///
/// reqwest proxies are client-level configuration, so the fetcher keeps a
/// prebuilt client per endpoint and the selector picks among them.
#[derive(Debug)]
struct ProxiedClient {
    endpoint: String,
    client: Client,
}

/// Issues single GET requests through randomly selected proxies
#[derive(Debug)]
pub struct Fetcher {
    clients: Vec<ProxiedClient>,
    selector: ProxySelector,
}

impl Fetcher {
    /// Builds a fetcher with one client per proxy endpoint
    ///
    /// # Arguments
    ///
    /// * `proxies` - Non-empty list of proxy endpoint URLs
    ///
    /// # Returns
    ///
    /// * `Ok(Fetcher)` - All clients built successfully
    /// * `Err(OctoseekError)` - Empty proxy list or a client failed to build
    pub fn new(proxies: &[String]) -> Result<Self, OctoseekError> {
        let selector = ProxySelector::new(proxies.to_vec())?;
        Self::with_selector(proxies, selector)
    }

    /// Builds a fetcher with a caller-provided selector (seeded in tests)
    pub fn with_selector(
        proxies: &[String],
        selector: ProxySelector,
    ) -> Result<Self, OctoseekError> {
        let mut clients = Vec::with_capacity(proxies.len());
        for endpoint in proxies {
            clients.push(ProxiedClient {
                endpoint: endpoint.clone(),
                client: build_proxied_client(endpoint)?,
            });
        }
        Ok(Self { clients, selector })
    }

    /// Fetches a URL through a randomly selected proxy
    ///
    /// Returns `None` for any transport failure or non-2xx status; the
    /// error is logged here and never propagated. No retries.
    pub async fn get(&mut self, url: &str) -> Option<FetchedPage> {
        let index = self.selector.select();
        let ProxiedClient { endpoint, client } = &self.clients[index];

        tracing::info!(%url, proxy = %endpoint, "Fetching");

        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    tracing::warn!(%url, status = status.as_u16(), "Non-success status");
                    return None;
                }

                match response.text().await {
                    Ok(body) => Some(FetchedPage {
                        status: status.as_u16(),
                        body,
                    }),
                    Err(e) => {
                        tracing::warn!(%url, error = %e, "Failed to read response body");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "Request failed");
                None
            }
        }
    }
}

/// Builds an HTTP client routed through the given proxy endpoint
fn build_proxied_client(endpoint: &str) -> Result<Client, OctoseekError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .proxy(Proxy::all(endpoint)?)
        .build()?;
    Ok(client)
}
