//! Integration tests for the generation pipeline

use layout_codegen::{
    generate, generate_with_config, Element, GenerateError, GeneratorConfig, LayoutDocument,
};

fn scenario_text() -> LayoutDocument {
    LayoutDocument::from_json(
        r#"{"name": "Demo", "elements": [
            {"id": "e1", "type": "text", "x": 10, "y": 20, "width": 100, "height": 30,
             "properties": {"content": "Hi"}}
        ]}"#,
    )
    .expect("Should load")
}

fn scenario_button() -> LayoutDocument {
    LayoutDocument::new("Demo").with_element(
        Element::new("b1", "button", 0.0, 0.0, 50.0, 20.0)
            .with_property("text", "Go")
            .with_property("backgroundColor", "#fff"),
    )
}

#[test]
fn test_html_text_element() {
    let html = generate(&scenario_text(), "html").unwrap().content;
    assert!(html.contains(
        "#e1 { position: absolute; left: 10px; top: 20px; width: 100px; height: 30px }"
    ));
    assert!(html.contains(r#"<div id="e1">Hi</div>"#));
}

#[test]
fn test_vue_text_element() {
    let vue = generate(&scenario_text(), "vue").unwrap().content;
    assert!(vue.contains(
        r#"<div style="position: absolute; left: 10px; top: 20px; width: 100px; height: 30px;">Hi</div>"#
    ));
}

#[test]
fn test_html_button_rule_order() {
    let html = generate(&scenario_button(), "html").unwrap().content;
    assert!(html.contains(
        "#b1 { position: absolute; left: 0px; top: 0px; width: 50px; height: 20px; \
         background-color: #fff; border: none; border-radius: 4px; cursor: pointer; padding: 10px 20px }"
    ));
    assert!(html.contains(r#"<button id="b1">Go</button>"#));
}

#[test]
fn test_unsupported_format_is_rejected() {
    for format in ["pdf", "HTML", "Vue", "jsx", ""] {
        match generate(&scenario_text(), format) {
            Err(GenerateError::UnsupportedFormat { format: rejected }) => {
                assert_eq!(rejected, format)
            }
            other => panic!("expected UnsupportedFormat for {format:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_unknown_type_placeholder() {
    let doc = LayoutDocument::new("Demo")
        .with_element(Element::new("x9", "widget", 1.0, 2.0, 3.0, 4.0));
    let html = generate(&doc, "html").unwrap().content;
    assert!(html.contains(r#"<div id="x9"><!-- widget --></div>"#));
    assert!(html.contains("#x9 { position: absolute; left: 1px; top: 2px; width: 3px; height: 4px }"));

    let vue = generate(&doc, "vue").unwrap().content;
    assert!(vue.contains(
        r#"<div style="position: absolute; left: 1px; top: 2px; width: 3px; height: 4px;"><!-- widget --></div>"#
    ));
}

#[test]
fn test_heading_levels() {
    let doc = LayoutDocument::new("Demo").with_element(
        Element::new("t", "heading", 0.0, 0.0, 200.0, 40.0)
            .with_property("content", "Title")
            .with_property("level", 3)
            .with_property("fontSize", 24),
    );
    let html = generate(&doc, "html").unwrap().content;
    assert!(html.contains(r#"<h3 id="t">Title</h3>"#));
    assert!(html.contains("height: 40px; font-size: 24px }"));

    let vue = generate(&doc, "vue").unwrap().content;
    assert!(vue.contains(
        r#"<h3 style="position: absolute; left: 0px; top: 0px; width: 200px; height: 40px; font-size: 24px;">Title</h3>"#
    ));
}

#[test]
fn test_image_attributes() {
    let doc = LayoutDocument::new("Demo").with_element(
        Element::new("img", "image", 5.0, 5.0, 64.0, 64.0)
            .with_property("src", "/logo.png")
            .with_property("alt", "Logo"),
    );
    let html = generate(&doc, "html").unwrap().content;
    assert!(html.contains(r#"<img id="img" src="/logo.png" alt="Logo">"#));
    assert!(!html.contains("</img>"));
}

#[test]
fn test_malformed_heading_produces_no_output() {
    let doc = LayoutDocument::new("Demo")
        .with_element(
            Element::new("ok", "text", 0.0, 0.0, 1.0, 1.0).with_property("content", "fine"),
        )
        .with_element(
            Element::new("bad", "heading", 0.0, 0.0, 1.0, 1.0).with_property("content", "No level"),
        );
    for format in ["html", "vue", "react"] {
        match generate(&doc, format) {
            Err(GenerateError::MalformedElement { id, reason }) => {
                assert_eq!(id, "bad");
                assert!(reason.contains("level"));
            }
            other => panic!("expected MalformedElement for {format}, got {other:?}"),
        }
    }
}

#[test]
fn test_escaping_user_content() {
    let doc = LayoutDocument::new("Demo").with_element(
        Element::new("x", "image", 0.0, 0.0, 1.0, 1.0)
            .with_property("src", "a.png\" onerror=\"alert(1)")
            .with_property("alt", "<b>"),
    );
    let html = generate(&doc, "html").unwrap().content;
    assert!(html.contains(r#"src="a.png&quot; onerror=&quot;alert(1)""#));
    assert!(html.contains(r#"alt="&lt;b&gt;""#));
}

#[test]
fn test_style_values_stay_inside_their_rule() {
    let doc = LayoutDocument::new("Demo")
        .with_element(
            Element::new("a", "text", 0.0, 0.0, 1.0, 1.0)
                .with_property("content", "A")
                .with_property("color", "red /*"),
        )
        .with_element(
            Element::new("b", "button", 0.0, 0.0, 1.0, 1.0)
                .with_property("text", "B")
                .with_property("backgroundColor", "blue\\")
                .with_property("textColor", "*/ green"),
        );
    let html = generate(&doc, "html").unwrap().content;
    assert!(!html.contains("/*"));
    assert!(!html.contains("*/"));
    assert!(html.contains("height: 1px; color: red / }\n"));
    assert!(html.contains("background-color: blue; color: * green; border: none;"));
}

#[test]
fn test_escaping_can_be_disabled() {
    let doc = LayoutDocument::new("Demo").with_element(
        Element::new("t", "text", 0.0, 0.0, 1.0, 1.0).with_property("content", "<em>raw</em>"),
    );
    let config = GeneratorConfig::new().with_escape(false);
    let html = generate_with_config(&doc, "html", &config).unwrap().content;
    assert!(html.contains(r#"<div id="t"><em>raw</em></div>"#));

    let escaped = generate(&doc, "html").unwrap().content;
    assert!(escaped.contains(r#"<div id="t">&lt;em&gt;raw&lt;/em&gt;</div>"#));
}

#[test]
fn test_compact_output() {
    let config = GeneratorConfig::new().with_pretty_print(false);
    let html = generate_with_config(&scenario_text(), "html", &config).unwrap().content;
    assert!(html.contains("\n#e1 { position: absolute;"));
    assert!(html.contains("\n<div id=\"e1\">Hi</div>\n"));
}

#[test]
fn test_numeric_properties_render_as_text() {
    let doc = LayoutDocument::new("Demo").with_element(
        Element::new("n", "button", 0.0, 0.0, 1.0, 1.0).with_property("text", 42),
    );
    let html = generate(&doc, "html").unwrap().content;
    assert!(html.contains(r#"<button id="n">42</button>"#));
}

#[test]
fn test_document_json_syntax_error_is_reported() {
    let source = "{\n  \"name\": \"Demo\",\n  \"elements\": [\n}";
    let err = LayoutDocument::from_json(source).unwrap_err();
    let report = err.format(source, "demo.json");
    assert!(report.contains("demo.json"));
}
