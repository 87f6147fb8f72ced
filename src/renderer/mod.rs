//! Per-format renderers
//!
//! Each target walks the document once, in order, resolving every element's
//! behavior from the [`ElementRegistry`] and assembling the fragments into a
//! complete artifact.

pub mod config;
mod elements;
pub mod escape;
pub mod html;
pub mod markup;
pub mod react;
pub mod registry;
pub mod vue;

pub use config::GeneratorConfig;
pub use html::render_html;
pub use markup::{Body, Markup};
pub use react::render_react;
pub use registry::{ElementBehavior, ElementRegistry, RegistryError};
pub use vue::render_vue;

use tracing::debug;

use crate::document::Element;

/// Look up the behavior for an element, noting placeholder fallbacks
fn behavior_for<'r>(registry: &'r ElementRegistry, element: &Element) -> &'r ElementBehavior {
    if !registry.contains(&element.kind) {
        debug!(id = %element.id, kind = %element.kind, "unrecognized element type, rendering placeholder");
    }
    registry.get(&element.kind)
}
