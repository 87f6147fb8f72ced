//! Output formats and the generated artifact

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Supported code targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Html,
    Vue,
    React,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Html, Format::Vue, Format::React];

    /// The identifier accepted by [`Format::from_str`]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Vue => "vue",
            Format::React => "react",
        }
    }

    /// File extension for exported artifacts
    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Vue => "vue",
            Format::React => "jsx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Format::Html => "text/html; charset=utf-8",
            Format::Vue | Format::React => "text/plain; charset=utf-8",
        }
    }
}

impl FromStr for Format {
    type Err = GenerateError;

    /// Case-sensitive; no aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "vue" => Ok(Format::Vue),
            "react" => Ok(Format::React),
            other => Err(GenerateError::unsupported(other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete generated source text for one document and format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub content: String,
    pub format: Format,
}

impl GeneratedArtifact {
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
