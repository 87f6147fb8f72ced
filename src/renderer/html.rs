//! Static HTML page generation

use std::borrow::Cow;

use crate::document::LayoutDocument;
use crate::error::GenerateError;
use crate::style;

use super::escape;
use super::markup::{write_fragment, TextEscape};
use super::registry::ElementRegistry;
use super::{behavior_for, GeneratorConfig};

/// Render a complete HTML page with one CSS rule per element
pub fn render_html(
    doc: &LayoutDocument,
    registry: &ElementRegistry,
    config: &GeneratorConfig,
) -> Result<String, GenerateError> {
    let text_escape = if config.escape {
        TextEscape::Html
    } else {
        TextEscape::None
    };

    let mut rules = Vec::with_capacity(doc.elements.len());
    let mut fragments = Vec::with_capacity(doc.elements.len());
    for element in &doc.elements {
        let behavior = behavior_for(registry, element);
        let markup = (behavior.markup)(element)?;
        rules.push(style::resolve(element, behavior).to_rule(&element.id, config.escape));
        fragments.push(write_fragment(&markup, ("id", element.id.as_str()), text_escape));
    }

    let (title, lang, font_family) = if config.escape {
        (
            escape::html_text(&doc.name),
            escape::html_attr(&config.lang),
            escape::css_value(&config.font_family),
        )
    } else {
        (
            Cow::Borrowed(doc.name.as_str()),
            Cow::Borrowed(config.lang.as_str()),
            Cow::Borrowed(config.font_family.as_str()),
        )
    };

    let indent = config.indent(4, 2);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", lang));
    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("    <title>{}</title>\n", title));
    out.push_str("    <style>\n");
    out.push_str("        * { box-sizing: border-box; margin: 0; padding: 0; }\n");
    out.push_str(&format!("        body {{ font-family: {}; }}\n", font_family));
    out.push_str("        .canvas { position: relative; min-height: 100vh; }\n");
    for rule in &rules {
        out.push_str(&indent);
        out.push_str(rule);
    }
    out.push_str("    </style>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str("    <div class=\"canvas\">\n");
    for fragment in &fragments {
        out.push_str(&indent);
        out.push_str(fragment);
        out.push('\n');
    }
    out.push_str("    </div>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    Ok(out)
}
