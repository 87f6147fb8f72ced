//! Element type registry
//!
//! Maps a type tag (`"text"`, `"button"`, ...) to the behavior that styles and
//! marks up elements of that type. Tags without an entry resolve to the
//! placeholder behavior, so documents containing types this crate does not
//! know about still generate.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use crate::document::Element;
use crate::error::GenerateError;
use crate::style::StyleDeclarations;

use super::elements;
use super::markup::Markup;

/// Appends type-specific declarations after the geometry
pub type StyleFn = fn(&Element, &mut StyleDeclarations);

/// Builds the markup for an element, failing when a required property is missing
pub type MarkupFn = fn(&Element) -> Result<Markup, GenerateError>;

/// Errors that can occur during registry operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate element type: {tag}")]
    Duplicate { tag: String },
}

/// Styling and markup for one element type
#[derive(Clone, Copy)]
pub struct ElementBehavior {
    pub style: StyleFn,
    pub markup: MarkupFn,
}

impl fmt::Debug for ElementBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementBehavior").finish_non_exhaustive()
    }
}

impl ElementBehavior {
    pub fn new(style: StyleFn, markup: MarkupFn) -> Self {
        Self { style, markup }
    }

    /// Check that the element carries what this behavior needs
    pub fn validate(&self, element: &Element) -> Result<(), GenerateError> {
        (self.markup)(element).map(|_| ())
    }
}

/// Registry of element behaviors keyed by type tag
#[derive(Debug, Clone)]
pub struct ElementRegistry {
    behaviors: HashMap<String, ElementBehavior>,
    fallback: ElementBehavior,
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementRegistry {
    /// Create a registry with no types; everything renders as a placeholder
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            fallback: elements::placeholder(),
        }
    }

    /// Create a registry with the built-in `text`, `heading`, `button` and `image` types
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (tag, behavior) in elements::builtins() {
            registry.behaviors.insert(tag.to_string(), behavior);
        }
        registry
    }

    /// Shared registry with the built-in types
    pub fn builtin() -> &'static ElementRegistry {
        static BUILTIN: OnceLock<ElementRegistry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtins)
    }

    /// Register a behavior for a new type tag
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        behavior: ElementBehavior,
    ) -> Result<(), RegistryError> {
        let tag = tag.into();
        if self.behaviors.contains_key(&tag) {
            return Err(RegistryError::Duplicate { tag });
        }
        self.behaviors.insert(tag, behavior);
        Ok(())
    }

    /// Get the behavior for a tag, or the placeholder behavior
    pub fn get(&self, tag: &str) -> &ElementBehavior {
        self.behaviors.get(tag).unwrap_or(&self.fallback)
    }

    /// Check if a tag has its own behavior
    pub fn contains(&self, tag: &str) -> bool {
        self.behaviors.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.behaviors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}
