//! Configuration file support
//!
//! The CLI reads an optional TOML file choosing the format used when none is
//! given on the command line, plus generator options:
//!
//! ```toml
//! default_format = "vue"
//!
//! [generator]
//! escape = true
//! font_family = "Inter, sans-serif"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::format::Format;
use crate::renderer::GeneratorConfig;

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for one CLI run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Format used when the caller does not name one
    pub default_format: Format,
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: Format::Html,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
default_format = "react"

[generator]
escape = false
font_family = "Inter, sans-serif"
lang = "nl"
pretty_print = false
"#,
        )
        .expect("Should parse");
        assert_eq!(config.default_format, Format::React);
        assert!(!config.generator.escape);
        assert_eq!(config.generator.font_family, "Inter, sans-serif");
        assert_eq!(config.generator.lang, "nl");
        assert!(!config.generator.pretty_print);
    }

    #[test]
    fn test_partial_generator_table_keeps_defaults() {
        let config = Config::from_toml("[generator]\nlang = \"fr\"\n").unwrap();
        assert!(config.generator.escape);
        assert_eq!(config.generator.lang, "fr");
        assert_eq!(config.default_format, Format::Html);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Config::from_toml("default_format = \"pdf\"").is_err());
        assert!(Config::from_toml("default_format = \"HTML\"").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::from_toml("colour = \"red\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/layout-codegen.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
