//! Language statistics scraping
//!
//! Repository landing pages render a per-language bar whose segments are
//! `span.Progress-item` elements with an `aria-label` of the form
//! `"{Language} {Percentage}%"`. This module scrapes those labels into an
//! ordered mapping. Scraping never fails: an empty or unparseable page
//! simply yields an empty mapping.

use scraper::{Html, Selector};
use serde::ser::{Serialize, Serializer};

/// Language name → displayed percentage, in page order
///
/// Backed by a vector of pairs so the order the page presented the
/// languages in survives serialization; serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageStats(Vec<(String, String)>);

impl LanguageStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up the percentage for a language name
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, pct)| pct.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, pct)| (name.as_str(), pct.as_str()))
    }

    fn push(&mut self, language: String, percentage: String) {
        self.0.push((language, percentage));
    }
}

impl Serialize for LanguageStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, pct)| (name, pct)))
    }
}

/// Extracts language statistics from a repository page body
///
/// Each progress item's label splits on its last space: everything before
/// is the language name (which may itself contain spaces), the final token
/// is the percentage. Labels that do not split into two non-empty parts
/// are skipped.
pub fn extract_language_stats(html: &str) -> LanguageStats {
    let mut stats = LanguageStats::default();

    let document = Html::parse_document(html);
    if let Ok(selector) = Selector::parse("span.Progress-item") {
        for element in document.select(&selector) {
            let label = element.value().attr("aria-label").unwrap_or("");
            if let Some((language, percentage)) = label.rsplit_once(' ') {
                if !language.is_empty() && !percentage.is_empty() {
                    stats.push(language.to_string(), percentage.to_string());
                }
            }
        }
    }

    stats
}
