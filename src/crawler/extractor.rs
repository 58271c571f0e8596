//! Result extraction from the search payload
//!
//! This module turns the deserialized search response into an ordered list
//! of typed result records. Extraction is pure: no network I/O happens
//! here, and the same payload always yields the same records in the same
//! order. A malformed result block is skipped, never fatal.

use crate::config::ResultKind;
use crate::crawler::languages::LanguageStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Deserialized search response body
///
/// Only the `payload.results` path matters; everything else in the
/// response is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub payload: PayloadInner,
}

#[derive(Debug, Default, Deserialize)]
pub struct PayloadInner {
    /// Result blocks in the order the endpoint returned them
    ///
    /// Kept as raw values so one malformed block fails its own typed
    /// parse without rejecting the whole payload.
    #[serde(default)]
    pub results: Vec<Value>,
}

/// One result block, parsed leniently
#[derive(Debug, Deserialize)]
struct ResultBlock {
    repo: Option<RepoRef>,
    number: Option<u64>,
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepoRef {
    repository: Option<RepositoryInfo>,
}

#[derive(Debug, Deserialize)]
struct RepositoryInfo {
    owner_login: Option<String>,
    name: Option<String>,
}

/// Extra data carried by repository records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoExtra {
    pub owner: String,
    pub language_stats: LanguageStats,
}

/// One extracted search result
///
/// All variants expose a URL; repository records additionally carry the
/// owner and (after enrichment) the language breakdown.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultRecord {
    Repository { url: String, extra: RepoExtra },
    Issue { url: String },
    Wiki { url: String },
}

impl ResultRecord {
    pub fn url(&self) -> &str {
        match self {
            ResultRecord::Repository { url, .. } => url,
            ResultRecord::Issue { url } => url,
            ResultRecord::Wiki { url } => url,
        }
    }
}

/// Extracts result records of the given kind from a search payload
///
/// Blocks are processed in received order, which fixes the output order.
/// A block that fails its typed parse or is missing a required field is
/// skipped. Repository records come back with empty language stats; the
/// coordinator fills those in.
pub fn extract(kind: ResultKind, payload: &SearchPayload, base_url: &str) -> Vec<ResultRecord> {
    let mut records = Vec::new();

    for value in &payload.payload.results {
        let block: ResultBlock = match serde_json::from_value(value.clone()) {
            Ok(block) => block,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed result block");
                continue;
            }
        };

        if let Some(record) = extract_block(kind, &block, base_url) {
            records.push(record);
        }
    }

    tracing::info!(kind = %kind, count = records.len(), "Extracted result records");
    records
}

/// Extracts a single record, or `None` if a required field is missing
fn extract_block(kind: ResultKind, block: &ResultBlock, base_url: &str) -> Option<ResultRecord> {
    let repository = block.repo.as_ref()?.repository.as_ref()?;
    let owner = repository.owner_login.as_deref()?;
    let name = repository.name.as_deref()?;

    match kind {
        ResultKind::Repositories => Some(ResultRecord::Repository {
            url: format!("{}/{}/{}", base_url, owner, name),
            extra: RepoExtra {
                owner: owner.to_string(),
                language_stats: LanguageStats::default(),
            },
        }),
        ResultKind::Issues => {
            let number = block.number?;
            Some(ResultRecord::Issue {
                url: format!("{}/{}/{}/issues/{}", base_url, owner, name, number),
            })
        }
        ResultKind::Wikis => {
            let path = block.path.as_deref()?;
            Some(ResultRecord::Wiki {
                url: format!("{}/{}/{}/wiki/{}", base_url, owner, name, wiki_slug(path)),
            })
        }
    }
}

/// Strips the trailing 3-character file extension from a wiki path
///
/// Wiki result paths end in a fixed-length extension (`.md`). The strip
/// only happens when the path actually ends in `.` plus two characters;
/// anything else is passed through unchanged with a warning, since a
/// blind truncation would mangle the slug.
fn wiki_slug(path: &str) -> &str {
    if let Some((index, c)) = path.char_indices().rev().nth(2) {
        if c == '.' {
            return &path[..index];
        }
    }
    tracing::warn!(%path, "Wiki path has no 3-character extension, using as-is");
    path
}
