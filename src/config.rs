//! Card list configuration.
//!
//! Every field has a default, so a configuration file only needs to name
//! what it changes:
//!
//! ```rust
//! use bubbletea_cardlist::Config;
//! use bubbletea_cardlist::paginator::Type;
//!
//! let config = Config::from_json(r#"{ "page_size": 5, "pagination": "dots" }"#).unwrap();
//! assert_eq!(config.page_size, 5);
//! assert_eq!(config.pagination, Type::Dots);
//! assert_eq!(config.next_label, "Next");
//! ```

use crate::error::{Error, Result};
use crate::paginator::{self, Type};
use serde::Deserialize;
use std::path::Path;

/// Settings for a [`CardList`](crate::CardList).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Products per page. Must be at least 1.
    pub page_size: usize,
    /// Page indicator style.
    pub pagination: Type,
    /// Label of the previous-page button.
    pub prev_label: String,
    /// Label of the next-page button.
    pub next_label: String,
    /// Prompt in front of the search input.
    pub search_prompt: String,
    /// Placeholder shown in the empty search input.
    pub search_placeholder: String,
    /// Message shown when no product matches.
    pub empty_message: String,
    /// Show the status line with counts and the page indicator.
    pub show_status_bar: bool,
    /// Show the key binding help line.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: paginator::DEFAULT_PER_PAGE,
            pagination: Type::Arabic,
            prev_label: "Previous".to_string(),
            next_label: "Next".to_string(),
            search_prompt: "Tag: ".to_string(),
            search_placeholder: "filter by tag…".to_string(),
            empty_message: "No products found.".to_string(),
            show_status_bar: true,
            show_help: true,
        }
    }
}

impl Config {
    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_default_page_size_is_ten() {
        assert_eq!(Config::default().page_size, 10);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_json(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_json(r#"{"page_sise": 3}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_labels_override() {
        let config =
            Config::from_json(r#"{"prev_label": "Back", "next_label": "More"}"#).unwrap();
        assert_eq!(config.prev_label, "Back");
        assert_eq!(config.next_label, "More");
        assert_eq!(config.pagination, Type::Arabic);
    }
}
