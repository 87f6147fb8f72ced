//! Error types for document loading and code generation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur while generating source text from a layout document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Format identifier outside `html`, `vue`, `react`
    #[error("unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// An element is missing a property its type needs, or a property has the wrong shape
    #[error("malformed element '{id}': {reason}")]
    MalformedElement { id: String, reason: String },
}

impl GenerateError {
    /// Create an unsupported format error
    pub fn unsupported(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a malformed element error
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedElement {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading a layout document from JSON
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An element is missing its id, type, or a geometry field
    #[error("invalid element at index {index}: {reason}")]
    InvalidElement { index: usize, reason: String },

    #[error("invalid project name: {reason}")]
    InvalidName { reason: String },
}

impl DocumentError {
    pub fn invalid_element(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidElement {
            index,
            reason: reason.into(),
        }
    }

    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }

    /// Get the source span if available
    ///
    /// Only JSON errors carry a position; the span covers the offending character.
    pub fn span(&self, source: &str) -> Option<Span> {
        match self {
            Self::Json(err) if err.line() > 0 => {
                let offset = char_offset(source, err.line(), err.column());
                let end = (offset + 1).min(source.chars().count());
                Some(offset..end.max(offset))
            }
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a source position are formatted as a plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span(source) else {
            return format!("Error: {}", self);
        };

        let message = match self {
            Self::Json(err) => format!("{:?} error in document", err.classify()),
            _ => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Error: {}", self),
        }
    }
}

/// Map a 1-based line/column pair to a character offset, clamped to the source length
fn char_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split('\n').enumerate() {
        let len = text.chars().count();
        if index + 1 == line {
            return offset + column.saturating_sub(1).min(len);
        }
        offset += len + 1;
    }
    source.chars().count()
}
