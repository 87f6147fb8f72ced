//! Style resolution
//!
//! Every element gets absolute positioning from its geometry, followed by
//! whatever declarations its type contributes. The declaration order is part
//! of the output contract: geometry first (`position`, `left`, `top`, `width`,
//! `height`), then type declarations in the order the type pushes them.
//!
//! The same declaration list is rendered two ways: as a CSS rule keyed by the
//! element id (HTML target) or as an inline `style` attribute value (Vue).

use std::borrow::Cow;

use crate::document::{format_number, Element};
use crate::renderer::escape;
use crate::renderer::registry::ElementBehavior;

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Ordered declarations for one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations(Vec<Declaration>);

impl StyleDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.push(Declaration::new(property, value));
    }

    /// Push a declaration only when the value is present
    pub fn push_some(&mut self, property: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.push(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as the body of a `style="..."` attribute
    ///
    /// Every declaration is terminated by `;` and separated by one space.
    pub fn to_inline(&self, escape_values: bool) -> String {
        self.0
            .iter()
            .map(|d| format!("{}: {};", d.property, value(d, escape_values)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as a CSS rule selecting the element by id, ending in a newline
    pub fn to_rule(&self, id: &str, escape_values: bool) -> String {
        let selector = if escape_values {
            escape::css_ident(id)
        } else {
            Cow::Borrowed(id)
        };
        let body = self
            .0
            .iter()
            .map(|d| format!("{}: {}", d.property, value(d, escape_values)))
            .collect::<Vec<_>>()
            .join("; ");
        format!("#{} {{ {} }}\n", selector, body)
    }
}

fn value(declaration: &Declaration, escape_values: bool) -> Cow<'_, str> {
    if escape_values {
        escape::css_value(&declaration.value)
    } else {
        Cow::Borrowed(declaration.value.as_str())
    }
}

/// Absolute positioning from the element geometry
pub fn geometry(element: &Element) -> StyleDeclarations {
    let mut decls = StyleDeclarations::new();
    decls.push("position", "absolute");
    decls.push("left", px(element.x));
    decls.push("top", px(element.y));
    decls.push("width", px(element.width));
    decls.push("height", px(element.height));
    decls
}

/// Geometry followed by the declarations the element type contributes
pub fn resolve(element: &Element, behavior: &ElementBehavior) -> StyleDeclarations {
    let mut decls = geometry(element);
    (behavior.style)(element, &mut decls);
    decls
}

/// Format a pixel length
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}
