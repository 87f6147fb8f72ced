//! Built-in element types

use serde_json::Value;

use crate::document::Element;
use crate::error::GenerateError;
use crate::style::StyleDeclarations;

use super::markup::{Body, Markup};
use super::registry::ElementBehavior;

/// Declarations every button gets, after its colors
const BUTTON_SUFFIX: [(&str, &str); 4] = [
    ("border", "none"),
    ("border-radius", "4px"),
    ("cursor", "pointer"),
    ("padding", "10px 20px"),
];

pub(crate) fn builtins() -> [(&'static str, ElementBehavior); 4] {
    [
        ("text", ElementBehavior::new(typography_style, text_markup)),
        ("heading", ElementBehavior::new(typography_style, heading_markup)),
        ("button", ElementBehavior::new(button_style, button_markup)),
        ("image", ElementBehavior::new(no_style, image_markup)),
    ]
}

/// Fallback for unrecognized types: geometry only, a comment naming the type
pub(crate) fn placeholder() -> ElementBehavior {
    ElementBehavior::new(no_style, placeholder_markup)
}

fn no_style(_: &Element, _: &mut StyleDeclarations) {}

fn typography_style(element: &Element, decls: &mut StyleDeclarations) {
    decls.push_some(
        "font-size",
        element.style_property("fontSize").map(|size| format!("{}px", size)),
    );
    decls.push_some("color", element.style_property("color"));
}

fn button_style(element: &Element, decls: &mut StyleDeclarations) {
    decls.push_some("background-color", element.style_property("backgroundColor"));
    decls.push_some("color", element.style_property("textColor"));
    for (property, value) in BUTTON_SUFFIX {
        decls.push(property, value);
    }
}

fn text_markup(element: &Element) -> Result<Markup, GenerateError> {
    Ok(Markup::text("div", require(element, "content")?))
}

fn heading_markup(element: &Element) -> Result<Markup, GenerateError> {
    let level = heading_level(element)?;
    let content = require(element, "content")?;
    Ok(Markup::text(format!("h{}", level), content))
}

fn button_markup(element: &Element) -> Result<Markup, GenerateError> {
    Ok(Markup::text("button", require(element, "text")?))
}

fn image_markup(element: &Element) -> Result<Markup, GenerateError> {
    let src = require(element, "src")?;
    let alt = require(element, "alt")?;
    Ok(Markup::void("img").with_attr("src", src).with_attr("alt", alt))
}

fn placeholder_markup(element: &Element) -> Result<Markup, GenerateError> {
    Ok(Markup::new("div", Body::Comment(element.kind.clone())))
}

fn require(element: &Element, key: &str) -> Result<String, GenerateError> {
    element.text_property(key).ok_or_else(|| {
        GenerateError::malformed(
            &element.id,
            format!("missing required property '{}' for type '{}'", key, element.kind),
        )
    })
}

/// Heading level 1-6, given as an integer or a numeric string
fn heading_level(element: &Element) -> Result<u8, GenerateError> {
    let value = element
        .property("level")
        .ok_or_else(|| GenerateError::malformed(&element.id, "missing required property 'level' for type 'heading'"))?;

    let level = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match level {
        Some(level @ 1..=6) => Ok(level as u8),
        _ => Err(GenerateError::malformed(
            &element.id,
            format!("heading level must be an integer from 1 to 6, got {}", value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn heading(level: Value) -> Element {
        Element::new("h", "heading", 0.0, 0.0, 100.0, 40.0)
            .with_property("content", "Title")
            .with_property("level", level)
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_markup(&heading(json!(2))).unwrap().tag, "h2");
        assert_eq!(heading_markup(&heading(json!("3"))).unwrap().tag, "h3");
        assert_eq!(heading_markup(&heading(json!(6.0))).unwrap().tag, "h6");
    }

    #[test]
    fn test_heading_level_out_of_range() {
        for bad in [json!(0), json!(7), json!(-1), json!(1.5), json!("h1"), json!([1])] {
            let err = heading_markup(&heading(bad)).unwrap_err();
            assert!(matches!(err, GenerateError::MalformedElement { ref id, .. } if id == "h"));
        }
    }

    #[test]
    fn test_heading_without_level() {
        let el = Element::new("h", "heading", 0.0, 0.0, 1.0, 1.0).with_property("content", "x");
        let err = heading_markup(&el).unwrap_err();
        assert!(err.to_string().contains("level"));
    }

    #[test]
    fn test_image_requires_src_and_alt() {
        let el = Element::new("i", "image", 0.0, 0.0, 1.0, 1.0).with_property("src", "a.png");
        assert!(image_markup(&el).is_err());
        let el = el.with_property("alt", "");
        let markup = image_markup(&el).unwrap();
        assert_eq!(markup.body, Body::Void);
        assert_eq!(
            markup.attrs,
            vec![("src", "a.png".to_string()), ("alt", String::new())]
        );
    }

    #[test]
    fn test_button_style_suffix_is_unconditional() {
        let el = Element::new("b", "button", 0.0, 0.0, 1.0, 1.0);
        let mut decls = StyleDeclarations::new();
        button_style(&el, &mut decls);
        let props: Vec<&str> = decls.iter().map(|d| d.property).collect();
        assert_eq!(props, vec!["border", "border-radius", "cursor", "padding"]);
    }

    #[test]
    fn test_button_colors_precede_suffix() {
        let el = Element::new("b", "button", 0.0, 0.0, 1.0, 1.0)
            .with_property("textColor", "#000")
            .with_property("backgroundColor", "#fff");
        let mut decls = StyleDeclarations::new();
        button_style(&el, &mut decls);
        let props: Vec<&str> = decls.iter().map(|d| d.property).take(2).collect();
        assert_eq!(props, vec!["background-color", "color"]);
    }

    #[test]
    fn test_font_size_string_gets_px() {
        let el = Element::new("t", "text", 0.0, 0.0, 1.0, 1.0).with_property("fontSize", "18");
        let mut decls = StyleDeclarations::new();
        typography_style(&el, &mut decls);
        assert_eq!(decls.iter().next().map(|d| d.value.as_str()), Some("18px"));
    }

    #[test]
    fn test_boolean_style_values_are_ignored() {
        let el = Element::new("t", "text", 0.0, 0.0, 1.0, 1.0)
            .with_property("fontSize", true)
            .with_property("color", false);
        let mut decls = StyleDeclarations::new();
        typography_style(&el, &mut decls);
        assert!(decls.is_empty());
    }

    #[test]
    fn test_placeholder_adds_no_style() {
        let el = Element::new("w", "widget", 0.0, 0.0, 1.0, 1.0).with_property("color", "red");
        let mut decls = StyleDeclarations::new();
        (placeholder().style)(&el, &mut decls);
        assert!(decls.is_empty());
    }
}
