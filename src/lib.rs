//! Layout Codegen - source code generation for visual page layouts
//!
//! This library turns a [`LayoutDocument`] (a named page of absolutely
//! positioned, typed elements) into source text for one of three targets:
//! a static HTML page, a Vue single-file component, or a React component.
//!
//! # Example
//!
//! ```rust
//! use layout_codegen::{generate, Element, LayoutDocument};
//!
//! let doc = LayoutDocument::new("Demo").with_element(
//!     Element::new("e1", "text", 10.0, 20.0, 100.0, 30.0).with_property("content", "Hi"),
//! );
//!
//! let html = generate(&doc, "html").unwrap();
//! assert!(html.content.contains(r#"<div id="e1">Hi</div>"#));
//! ```

pub mod breakpoint;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod history;
pub mod renderer;
pub mod style;

pub use breakpoint::Breakpoint;
pub use config::{Config, ConfigError};
pub use document::{Element, LayoutDocument, Properties, Settings};
pub use error::{DocumentError, GenerateError};
pub use export::{export, preview, Export};
pub use format::{Format, GeneratedArtifact};
pub use history::History;
pub use renderer::{ElementBehavior, ElementRegistry, GeneratorConfig};

use tracing::warn;

/// Generate source text for `format` with default configuration
///
/// `format` must be exactly `"html"`, `"vue"` or `"react"`; anything else
/// fails with [`GenerateError::UnsupportedFormat`]. Defaulting a missing
/// format is left to the caller.
///
/// # Example
///
/// ```rust
/// use layout_codegen::{generate, GenerateError, LayoutDocument};
///
/// let doc = LayoutDocument::new("Demo");
/// assert!(matches!(
///     generate(&doc, "pdf"),
///     Err(GenerateError::UnsupportedFormat { .. })
/// ));
/// ```
pub fn generate(doc: &LayoutDocument, format: &str) -> Result<GeneratedArtifact, GenerateError> {
    generate_with_config(doc, format, &GeneratorConfig::default())
}

/// Generate source text for `format` with custom configuration
///
/// # Example
///
/// ```rust
/// use layout_codegen::{generate_with_config, GeneratorConfig, LayoutDocument};
///
/// let config = GeneratorConfig::new().with_lang("fr");
/// let page = generate_with_config(&LayoutDocument::new("Accueil"), "html", &config).unwrap();
/// assert!(page.content.contains(r#"<html lang="fr">"#));
/// ```
pub fn generate_with_config(
    doc: &LayoutDocument,
    format: &str,
    config: &GeneratorConfig,
) -> Result<GeneratedArtifact, GenerateError> {
    let format = format.parse::<Format>().map_err(|e| {
        warn!(%e, "rejecting generation request");
        e
    })?;
    generate_format(doc, format, config)
}

/// Generate source text for an already parsed format using the built-in element types
pub fn generate_format(
    doc: &LayoutDocument,
    format: Format,
    config: &GeneratorConfig,
) -> Result<GeneratedArtifact, GenerateError> {
    generate_with_registry(doc, format, config, ElementRegistry::builtin())
}

/// Generate source text using a custom element registry
///
/// Every element is validated against its type before any output is
/// assembled, so a failure never yields a partial artifact.
#[tracing::instrument(skip(doc, config, registry), fields(name = %doc.name, elements = doc.elements.len()))]
pub fn generate_with_registry(
    doc: &LayoutDocument,
    format: Format,
    config: &GeneratorConfig,
    registry: &ElementRegistry,
) -> Result<GeneratedArtifact, GenerateError> {
    let content = match format {
        Format::Html => renderer::render_html(doc, registry, config),
        Format::Vue => renderer::render_vue(doc, registry, config),
        Format::React => validate(doc, registry).map(|()| renderer::render_react(doc)),
    }
    .map_err(|e| {
        warn!(%e, "generation failed");
        e
    })?;

    Ok(GeneratedArtifact { content, format })
}

/// Check every element against the behavior its type resolves to
pub fn validate(doc: &LayoutDocument, registry: &ElementRegistry) -> Result<(), GenerateError> {
    doc.elements
        .iter()
        .try_for_each(|element| registry.get(&element.kind).validate(element))
}
