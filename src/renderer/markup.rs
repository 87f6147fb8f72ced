//! Format-neutral markup for one element
//!
//! Element types describe their markup once; the HTML and Vue targets differ
//! only in the leading attribute (`id="..."` versus `style="..."`) and in how
//! text content is escaped.

use std::borrow::Cow;

use super::escape;

/// What goes between the opening and closing tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Escaped text content
    Text(String),
    /// An HTML comment, used for placeholders
    Comment(String),
    /// No closing tag (`<img>`)
    Void,
}

/// A single element tag with attributes and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub tag: Cow<'static, str>,
    pub attrs: Vec<(&'static str, String)>,
    pub body: Body,
}

impl Markup {
    pub fn new(tag: impl Into<Cow<'static, str>>, body: Body) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            body,
        }
    }

    pub fn text(tag: impl Into<Cow<'static, str>>, text: impl Into<String>) -> Self {
        Self::new(tag, Body::Text(text.into()))
    }

    pub fn void(tag: impl Into<Cow<'static, str>>) -> Self {
        Self::new(tag, Body::Void)
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }
}

/// Text escaping applied to `Body::Text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEscape {
    Html,
    Vue,
    None,
}

impl TextEscape {
    fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            TextEscape::Html => escape::html_text(text),
            TextEscape::Vue => escape::vue_text(text),
            TextEscape::None => Cow::Borrowed(text),
        }
    }
}

/// Write markup as a single-line fragment
///
/// `lead` is the attribute every target puts first. Attribute values are
/// escaped unless `text_escape` is [`TextEscape::None`].
pub fn write_fragment(markup: &Markup, lead: (&str, &str), text_escape: TextEscape) -> String {
    let escape_attrs = text_escape != TextEscape::None;
    let attr = |value: &str| -> String {
        if escape_attrs {
            escape::html_attr(value).into_owned()
        } else {
            value.to_string()
        }
    };

    let mut out = format!("<{} {}=\"{}\"", markup.tag, lead.0, attr(lead.1));
    for (name, value) in &markup.attrs {
        out.push_str(&format!(" {}=\"{}\"", name, attr(value)));
    }
    out.push('>');

    match &markup.body {
        Body::Void => return out,
        Body::Text(text) => out.push_str(&text_escape.apply(text)),
        Body::Comment(text) => {
            let text = if escape_attrs {
                escape::comment(text)
            } else {
                Cow::Borrowed(text.as_str())
            };
            out.push_str(&format!("<!-- {} -->", text));
        }
    }

    out.push_str(&format!("</{}>", markup.tag));
    out
}
