//! Output module for writing search results
//!
//! Results are written as an ordered JSON array. The default shape matches
//! the historical output contract: one `url` field per record. The full
//! shape additionally carries `extra { owner, language_stats }` for
//! repository records.

use crate::crawler::{RepoExtra, ResultRecord};
use crate::OctoseekError;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Url-only view of a record
#[derive(Serialize)]
struct UrlView<'a> {
    url: &'a str,
}

/// Full view of a record; `extra` is present only for repositories
#[derive(Serialize)]
struct FullView<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<&'a RepoExtra>,
}

/// Renders records as a pretty-printed JSON array
///
/// # Arguments
///
/// * `records` - Records in output order
/// * `full` - Include per-record `extra` data instead of just `url`
pub fn render_results(records: &[ResultRecord], full: bool) -> Result<String, OctoseekError> {
    let json = if full {
        let views: Vec<FullView> = records
            .iter()
            .map(|record| FullView {
                url: record.url(),
                extra: match record {
                    ResultRecord::Repository { extra, .. } => Some(extra),
                    _ => None,
                },
            })
            .collect();
        serde_json::to_string_pretty(&views)?
    } else {
        let views: Vec<UrlView> = records
            .iter()
            .map(|record| UrlView { url: record.url() })
            .collect();
        serde_json::to_string_pretty(&views)?
    };
    Ok(json)
}

/// Writes records to a JSON file
///
/// Always produces a file, even for zero records (an empty array).
pub fn write_results(
    records: &[ResultRecord],
    output_path: &Path,
    full: bool,
) -> Result<(), OctoseekError> {
    let json = render_results(records, full)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    tracing::info!(
        path = %output_path.display(),
        count = records.len(),
        "Wrote results"
    );
    Ok(())
}
