//! Structural validation of article request bodies.
//!
//! Produces either a typed [`ArticleInput`] or a list of field-level [`ValidationError`]s in the
//! usual `{"loc": [...], "msg": "...", "type": "..."}` shape. Every failing field is reported, not
//! only the first one.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::types::ArticleInput;

/// One segment of an error location: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(key: &str) -> Self {
        LocItem::Key(key.to_string())
    }
}

impl From<usize> for LocItem {
    fn from(index: usize) -> Self {
        LocItem::Index(index)
    }
}

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ValidationError {
    fn new(loc: Vec<LocItem>, kind: &'static str, msg: &str) -> Self {
        Self {
            loc,
            msg: msg.to_string(),
            kind,
        }
    }

    fn body() -> Vec<LocItem> {
        vec!["body".into()]
    }

    fn field(name: &str) -> Vec<LocItem> {
        vec!["body".into(), name.into()]
    }

    /// Body could not be read from the request at all.
    pub fn unreadable_body(reason: &str) -> Self {
        Self::new(Self::body(), "body_read", reason)
    }
}

/// All failures found in one request body. Serializes as `{"detail": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub detail: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn single(error: ValidationError) -> Self {
        Self {
            detail: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .detail
            .iter()
            .map(|e| {
                let loc: Vec<String> = e
                    .loc
                    .iter()
                    .map(|item| match item {
                        LocItem::Key(k) => k.clone(),
                        LocItem::Index(i) => i.to_string(),
                    })
                    .collect();
                format!("{} ({})", loc.join("."), e.kind)
            })
            .collect();
        write!(f, "invalid request body: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

const MSG_MISSING: &str = "Field required";
const MSG_STRING: &str = "Input should be a valid string";
const MSG_LIST: &str = "Input should be a valid list";
const MSG_TOO_SHORT: &str = "String should have at least 1 character";
const MSG_OBJECT: &str = "Input should be a valid dictionary or object to extract fields from";
const MSG_JSON: &str = "JSON decode error";

impl ArticleInput {
    /// Parses and validates a raw JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationErrors> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationErrors::single(ValidationError::new(
                ValidationError::body(),
                "missing",
                MSG_MISSING,
            )));
        }
        let value: Value = serde_json::from_slice(body).map_err(|_| {
            ValidationErrors::single(ValidationError::new(
                ValidationError::body(),
                "json_invalid",
                MSG_JSON,
            ))
        })?;
        Self::from_value(&value)
    }

    /// Validates an already-parsed JSON value. Unknown fields are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationErrors> {
        let Some(object) = value.as_object() else {
            return Err(ValidationErrors::single(ValidationError::new(
                ValidationError::body(),
                "model_attributes_type",
                MSG_OBJECT,
            )));
        };

        let mut errors = Vec::new();
        let title = required_string(object, "title", &mut errors);
        if matches!(&title, Some(t) if t.is_empty()) {
            errors.push(ValidationError::new(
                ValidationError::field("title"),
                "string_too_short",
                MSG_TOO_SHORT,
            ));
        }
        let content = required_string(object, "content", &mut errors);
        let tags = optional_string_list(object, "tags", &mut errors);
        let publish_date = optional_string(object, "publish_date", &mut errors);

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => Ok(ArticleInput {
                title,
                content,
                tags,
                publish_date,
            }),
            _ => Err(ValidationErrors { detail: errors }),
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(ValidationError::new(
                ValidationError::field(field),
                "string_type",
                MSG_STRING,
            ));
            None
        }
        None => {
            errors.push(ValidationError::new(
                ValidationError::field(field),
                "missing",
                MSG_MISSING,
            ));
            None
        }
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(ValidationError::new(
                ValidationError::field(field),
                "string_type",
                MSG_STRING,
            ));
            None
        }
    }
}

/// `null` and absence both mean "no tags".
fn optional_string_list(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Vec<String> {
    match object.get(field) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    _ => errors.push(ValidationError::new(
                        vec!["body".into(), field.into(), index.into()],
                        "string_type",
                        MSG_STRING,
                    )),
                }
            }
            out
        }
        Some(_) => {
            errors.push(ValidationError::new(
                ValidationError::field(field),
                "list_type",
                MSG_LIST,
            ));
            Vec::new()
        }
    }
}
