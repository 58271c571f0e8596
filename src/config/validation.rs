use crate::config::types::SearchInput;
use crate::ConfigError;
use url::Url;

/// Validates a search input payload
///
/// These are the only failures that should stop the process: everything
/// after startup degrades to empty results instead of erroring out.
pub fn validate(input: &SearchInput) -> Result<(), ConfigError> {
    validate_keywords(&input.keywords)?;
    validate_proxies(&input.proxies)?;
    Ok(())
}

/// Validates the keyword list: non-empty, no blank entries
fn validate_keywords(keywords: &[String]) -> Result<(), ConfigError> {
    if keywords.is_empty() {
        return Err(ConfigError::Validation(
            "keywords must contain at least one entry".to_string(),
        ));
    }

    for keyword in keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords cannot contain blank entries".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the proxy list: non-empty, each entry an http(s) URL
fn validate_proxies(proxies: &[String]) -> Result<(), ConfigError> {
    if proxies.is_empty() {
        return Err(ConfigError::Validation(
            "proxies must contain at least one endpoint".to_string(),
        ));
    }

    for proxy in proxies {
        let url = Url::parse(proxy)
            .map_err(|e| ConfigError::InvalidProxy(format!("'{}': {}", proxy, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidProxy(format!(
                "'{}': scheme must be http or https",
                proxy
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::ResultKind;

    fn input(keywords: Vec<&str>, proxies: Vec<&str>) -> SearchInput {
        SearchInput {
            keywords: keywords.into_iter().map(String::from).collect(),
            kind: ResultKind::Repositories,
            proxies: proxies.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_valid_input() {
        let input = input(vec!["openstack", "nova"], vec!["http://194.126.37.94:8080"]);
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let input = input(vec![], vec!["http://p1"]);
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let input = input(vec!["ok", "  "], vec!["http://p1"]);
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_empty_proxies_rejected() {
        let input = input(vec!["ok"], vec![]);
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_malformed_proxy_rejected() {
        let input = input(vec!["ok"], vec!["not a url"]);
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_non_http_proxy_rejected() {
        let input = input(vec!["ok"], vec!["ftp://proxy:8080"]);
        assert!(validate(&input).is_err());
    }
}
