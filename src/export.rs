//! Export and preview responses
//!
//! Wraps a generated artifact with what a caller needs to serve it: a
//! suggested filename and a content type.

use crate::document::LayoutDocument;
use crate::error::GenerateError;
use crate::format::Format;
use crate::renderer::GeneratorConfig;

/// A generated artifact ready to be downloaded or displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub content: String,
    pub filename: String,
    pub content_type: &'static str,
}

/// Generate `format` and name the result after the document
pub fn export(
    doc: &LayoutDocument,
    format: Format,
    config: &GeneratorConfig,
) -> Result<Export, GenerateError> {
    let artifact = crate::generate_format(doc, format, config)?;
    Ok(Export {
        content: artifact.into_content(),
        filename: filename(&doc.name, format),
        content_type: format.content_type(),
    })
}

/// Generate the HTML page for in-browser preview
pub fn preview(doc: &LayoutDocument, config: &GeneratorConfig) -> Result<Export, GenerateError> {
    export(doc, Format::Html, config)
}

/// `{name}.{extension}`, with path separators and control characters replaced
pub fn filename(name: &str, format: Format) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let stem = if stem.is_empty() { "untitled" } else { stem.as_str() };
    format!("{}.{}", stem, format.extension())
}
