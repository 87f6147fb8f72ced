//! Vue single-file component generation

use crate::document::LayoutDocument;
use crate::error::GenerateError;
use crate::style;

use super::markup::{write_fragment, TextEscape};
use super::registry::ElementRegistry;
use super::{behavior_for, GeneratorConfig};

/// Render a Vue SFC with inline-styled elements inside a canvas div
pub fn render_vue(
    doc: &LayoutDocument,
    registry: &ElementRegistry,
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let text_escape = if config.escape {
        TextEscape::Vue
    } else {
        TextEscape::None
    };
    let indent = config.indent(2, 2);

    let mut template = String::new();
    for element in &doc.elements {
        let behavior = behavior_for(registry, element);
        let markup = (behavior.markup)(element)?;
        let inline = style::resolve(element, behavior).to_inline(config.escape);
        template.push_str(&indent);
        template.push_str(&write_fragment(&markup, ("style", inline.as_str()), text_escape));
        template.push('\n');
    }

    Ok(format!(
        "<template>\n  <div class=\"canvas\">\n{}  </div>\n</template>\n\n<script setup>\n// Generated Vue component\n</script>\n",
        template
    ))
}
