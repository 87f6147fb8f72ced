//! Configuration for code generation

use serde::Deserialize;

/// Font stack used by the HTML page when none is configured
pub const DEFAULT_FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";

/// Configuration options for generated output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Escape interpolated text and attribute values for the target syntax
    pub escape: bool,

    /// Font family for the HTML page body
    pub font_family: String,

    /// `lang` attribute of the HTML page
    pub lang: String,

    /// Whether to indent element fragments to their nesting level
    pub pretty_print: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            escape: true,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            lang: "en".to_string(),
            pretty_print: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether interpolated values are escaped
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Set the page font family
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Set the page language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set whether to indent fragments
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Indentation for a fragment `depth` levels deep
    ///
    /// HTML uses four spaces per level, Vue two.
    pub(crate) fn indent(&self, width: usize, depth: usize) -> String {
        if self.pretty_print {
            " ".repeat(width * depth)
        } else {
            String::new()
        }
    }
}
