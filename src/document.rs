//! Layout document model
//!
//! A [`LayoutDocument`] is the immutable input to generation: a named page
//! with an ordered list of absolutely positioned [`Element`]s. Documents are
//! usually produced by the editing layer as JSON; [`LayoutDocument::from_json`]
//! validates the element shape so that generation only ever sees elements
//! with an id, a type tag, and all four geometry fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::breakpoint::Breakpoint;
use crate::error::DocumentError;

/// Type-specific element properties, in insertion order
pub type Properties = IndexMap<String, Value>;

/// Opaque per-document settings owned by the editing layer
pub type Settings = IndexMap<String, Value>;

/// Maximum length of a project name accepted by the loader
pub const MAX_NAME_LEN: usize = 255;

/// A named page made of positioned elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct LayoutDocument {
    pub name: String,
    pub elements: Vec<Element>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub settings: Settings,
}

/// One positioned, typed visual element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,
}

impl LayoutDocument {
    /// Create an empty document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            settings: Settings::new(),
        }
    }

    /// Append an element
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Set a document setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Parse and validate a document from JSON text
    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(source)?;
        raw.try_into()
    }

    /// Serialize the document back to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The breakpoint the editor was on, from `settings.breakpoint`
    ///
    /// Falls back to desktop when the setting is absent or unknown.
    pub fn active_breakpoint(&self) -> Breakpoint {
        self.settings
            .get("breakpoint")
            .and_then(Value::as_str)
            .and_then(|id| id.parse().ok())
            .unwrap_or_default()
    }
}

impl Element {
    /// Create an element with no properties
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            x,
            y,
            width,
            height,
            properties: Properties::new(),
        }
    }

    /// Set a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property, treating `null` as absent
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).filter(|v| !v.is_null())
    }

    /// Look up a property and render it as text
    ///
    /// Strings are returned as-is, numbers without a trailing `.0`, booleans
    /// as `true`/`false`. Arrays and objects have no text form.
    pub fn text_property(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            Value::Bool(b) => Some(b.to_string()),
            _ => self.style_property(key),
        }
    }

    /// Look up a property usable as a CSS value: a string or a number
    pub fn style_property(&self, key: &str) -> Option<String> {
        match self.property(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(number_text(n)),
            _ => None,
        }
    }
}

fn number_text(n: &Number) -> String {
    match (n.as_i64(), n.as_u64(), n.as_f64()) {
        (Some(i), _, _) => i.to_string(),
        (None, Some(u), _) => u.to_string(),
        (None, None, Some(f)) => format_number(f),
        (None, None, None) => n.to_string(),
    }
}

/// Format a pixel quantity, dropping a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // normalizes -0
        return "0".to_string();
    }
    format!("{}", value)
}

/// Loosely typed document as it arrives from the editing layer
#[derive(Deserialize)]
struct RawDocument {
    name: Option<String>,
    elements: Option<Vec<RawElement>>,
    settings: Option<Settings>,
}

#[derive(Deserialize)]
struct RawElement {
    id: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    properties: Option<Properties>,
}

impl TryFrom<RawDocument> for LayoutDocument {
    type Error = DocumentError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .ok_or_else(|| DocumentError::invalid_name("missing"))?;
        if name.trim().is_empty() {
            return Err(DocumentError::invalid_name("must not be empty"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DocumentError::invalid_name(format!(
                "longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        let elements = raw
            .elements
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, element)| element.into_element(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            elements,
            settings: raw.settings.unwrap_or_default(),
        })
    }
}

impl RawElement {
    fn into_element(self, index: usize) -> Result<Element, DocumentError> {
        let id = match self.id {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(Value::Number(n)) => number_text(&n),
            Some(_) => {
                return Err(DocumentError::invalid_element(
                    index,
                    "id must be a non-empty string or a number",
                ))
            }
            None => return Err(DocumentError::invalid_element(index, "missing id")),
        };

        let missing =
            |field: &str| DocumentError::invalid_element(index, format!("'{}' is missing {}", id, field));

        let kind = self.kind.ok_or_else(|| missing("type"))?;
        let x = self.x.ok_or_else(|| missing("x"))?;
        let y = self.y.ok_or_else(|| missing("y"))?;
        let width = self.width.ok_or_else(|| missing("width"))?;
        let height = self.height.ok_or_else(|| missing("height"))?;

        Ok(Element {
            id,
            kind,
            x,
            y,
            width,
            height,
            properties: self.properties.unwrap_or_default(),
        })
    }
}
