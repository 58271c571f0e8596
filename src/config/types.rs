use serde::{Deserialize, Serialize};
use std::fmt;

/// Input payload for a search run
///
/// Deserialized from the JSON input file. All three fields are required;
/// semantic checks (non-empty lists, parseable proxy URLs) happen in
/// [`crate::config::validation`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchInput {
    /// Keywords to search for, in order
    pub keywords: Vec<String>,

    /// Which kind of results to extract
    #[serde(rename = "type")]
    pub kind: ResultKind,

    /// Proxy endpoints to route outbound requests through
    pub proxies: Vec<String>,
}

impl SearchInput {
    /// Builds the immutable query for this input
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.keywords.clone(), self.kind)
    }
}

/// The kind of search results to extract
///
/// Variant names match the `type=` values the search endpoint expects,
/// case-sensitively. An unrecognized string in the input file fails
/// deserialization, surfacing as a configuration error at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ResultKind {
    Repositories,
    Issues,
    Wikis,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultKind::Repositories => "Repositories",
            ResultKind::Issues => "Issues",
            ResultKind::Wikis => "Wikis",
        };
        write!(f, "{}", s)
    }
}

/// An immutable search query: ordered keywords plus a result kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keywords: Vec<String>,
    kind: ResultKind,
}

impl SearchQuery {
    pub fn new(keywords: Vec<String>, kind: ResultKind) -> Self {
        Self { keywords, kind }
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Renders the search URL against the given base
    ///
    /// Keywords are joined with `+` as the endpoint expects them.
    pub fn search_url(&self, base_url: &str) -> String {
        format!(
            "{}/search?q={}&type={}",
            base_url,
            self.keywords.join("+"),
            self.kind
        )
    }
}
