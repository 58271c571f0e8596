use crate::config::types::SearchInput;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and validates a search input file
///
/// # Arguments
///
/// * `path` - Path to the JSON input file
///
/// # Returns
///
/// * `Ok(SearchInput)` - Successfully loaded and validated input
/// * `Err(ConfigError)` - Failed to read, parse, or validate the input
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use octoseek::config::load_input;
///
/// let input = load_input(Path::new("input.json")).unwrap();
/// println!("Searching for: {:?}", input.keywords);
/// ```
pub fn load_input(path: &Path) -> Result<SearchInput, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let input: SearchInput = serde_json::from_str(&content)?;

    validate(&input)?;

    Ok(input)
}
