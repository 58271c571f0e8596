//! Proxy endpoint selection
//!
//! Every outbound request goes through one of the configured proxy
//! endpoints, picked uniformly at random with replacement. The randomness
//! source is owned by the selector so tests can seed it.

use crate::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a proxy endpoint at random for each outgoing request
///
/// Holds the configured endpoint list and its own RNG. Repeated calls may
/// return the same endpoint; there is no rotation or affinity guarantee.
#[derive(Debug)]
pub struct ProxySelector {
    endpoints: Vec<String>,
    rng: StdRng,
}

impl ProxySelector {
    /// Creates a selector over a non-empty endpoint list
    ///
    /// An empty list is a configuration error: it is rejected here, at
    /// startup, so `select` never has to handle the case.
    pub fn new(endpoints: Vec<String>) -> Result<Self, ConfigError> {
        Self::with_rng(endpoints, StdRng::from_entropy())
    }

    /// Creates a selector with a fixed seed, for deterministic tests
    pub fn seeded(endpoints: Vec<String>, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(endpoints, StdRng::seed_from_u64(seed))
    }

    fn with_rng(endpoints: Vec<String>, rng: StdRng) -> Result<Self, ConfigError> {
        if endpoints.is_empty() {
            return Err(ConfigError::Validation(
                "proxy endpoint list cannot be empty".to_string(),
            ));
        }
        Ok(Self { endpoints, rng })
    }

    /// Selects one endpoint uniformly at random, returning its index
    pub fn select(&mut self) -> usize {
        let index = self.rng.gen_range(0..self.endpoints.len());
        tracing::debug!(proxy = %self.endpoints[index], "Selected proxy endpoint");
        index
    }

    /// Returns the endpoint at the given index
    pub fn endpoint(&self, index: usize) -> &str {
        &self.endpoints[index]
    }

    /// Number of configured endpoints
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
