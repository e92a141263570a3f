//! Missing-value markers in the exhibition CSV

use serde::{Serialize, Deserialize};

/// Cell values that mean "no value"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullConfig {
    pub patterns: Vec<String>,

    /// Compare against the trimmed cell
    pub trim_whitespace: bool,

    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        let patterns = ["", "-", "N/A", "NA", "null", "None"];
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Extend the marker list, ignoring duplicates
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
        self
    }

    pub fn is_null(&self, value: &str) -> bool {
        let candidate = if self.trim_whitespace { value.trim() } else { value };
        self.patterns.iter().any(|pattern| match self.case_sensitive {
            true => candidate == pattern,
            false => candidate.eq_ignore_ascii_case(pattern),
        })
    }

    /// The trimmed cell, or `None` when it is a missing-value marker
    pub fn present<'a>(&self, value: &'a str) -> Option<&'a str> {
        if self.is_null(value) {
            None
        } else {
            Some(value.trim())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let config = NullConfig::default();
        assert!(config.is_null(""));
        assert!(config.is_null("  n/a "));
        assert!(config.is_null("NULL"));
        assert!(!config.is_null("Berlin"));
    }

    #[test]
    fn test_case_sensitive_matching() {
        let config = NullConfig {
            patterns: vec!["NA".to_string()],
            trim_whitespace: false,
            case_sensitive: true,
        };
        assert!(config.is_null("NA"));
        assert!(!config.is_null("na"));
        assert!(!config.is_null(" NA"));
    }

    #[test]
    fn test_present_trims_values() {
        let config = NullConfig::default().with_pattern("?").with_pattern("?");
        assert_eq!(config.patterns.iter().filter(|p| *p == "?").count(), 1);
        assert_eq!(config.present(" ? "), None);
        assert_eq!(config.present("  Paris "), Some("Paris"));
    }

    #[test]
    fn test_partial_config_file() {
        let config: NullConfig = serde_json::from_str(r#"{ "case_sensitive": true }"#).unwrap();
        assert!(config.case_sensitive);
        assert!(config.trim_whitespace);
        assert!(config.is_null("None"));
        assert!(!config.is_null("none"));
    }
}
