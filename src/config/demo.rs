//! Demonstration script configuration.
//!
//! The defaults reproduce the fixed script shipped with the binary; a config
//! file may replace any of the lists.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Inputs for the demonstration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Words inserted into the suffix counter, valued by position
    pub words: Vec<String>,

    /// Suffix patterns to count
    pub suffixes: Vec<String>,

    /// Prefixes to test
    pub prefixes: Vec<String>,

    /// Batches for longest-common-prefix search
    pub batches: Vec<BatchCase>,
}

/// One longest-common-prefix case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCase {
    /// Strings to compare
    pub strings: Vec<String>,

    /// Expected prefix, printed alongside the result when present
    #[serde(default)]
    pub expected: Option<String>,
}

impl BatchCase {
    fn new(strings: &[&str], expected: &str) -> Self {
        Self {
            strings: strings.iter().map(|s| s.to_string()).collect(),
            expected: Some(expected.to_string()),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            words: owned(&["apple", "application", "banana", "cat"]),
            suffixes: owned(&["e", "ion", "a", "at"]),
            prefixes: owned(&["app", "bat", "ban", "ca"]),
            batches: vec![
                BatchCase::new(&["flower", "flow", "flight"], "fl"),
                BatchCase::new(&["interspecies", "interstellar", "interstate"], "inters"),
                BatchCase::new(&["dog", "racecar", "car"], ""),
            ],
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.words.is_empty() {
            return Err(ConfigError::ValidationError(
                "demo.words must contain at least one word".to_string(),
            ));
        }
        Ok(())
    }
}
