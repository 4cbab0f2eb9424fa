//! Inspection of `serde` data through `serde_json::Value`.
//!
//! This module lets any `Serialize` type reach the redactor without deriving
//! `Inspect`. JSON objects become mappings (in insertion order, through
//! `serde_json`'s `preserve_order`), arrays become sequences, `null` is absent
//! and every other value is a scalar.
//!
//! It does not distinguish structs from maps: both serialize to JSON objects.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{
    inspect::{erase, Inspect, Shape},
    Error,
};

impl Inspect for JsonValue {
    fn shape(&self) -> Shape<'_> {
        match self {
            JsonValue::Null => Shape::Absent,
            JsonValue::Bool(value) => Shape::scalar(value),
            JsonValue::Number(value) => Shape::scalar(value),
            JsonValue::String(value) => Shape::borrowed(value),
            JsonValue::Array(items) => Shape::sequence(items.iter().map(erase)),
            JsonValue::Object(map) => {
                Shape::mapping(map.iter().map(|(key, value)| (key.as_str(), erase(value))))
            }
        }
    }
}

/// An owned JSON snapshot of a `Serialize` value, ready for inspection.
///
/// ```rust
/// use redaction_tree::{json::Serialized, Redactor};
///
/// #[derive(serde::Serialize)]
/// struct Login {
///     user: String,
///     password: String,
/// }
///
/// let login = Login { user: "alice".into(), password: "hunter2".into() };
/// let snapshot = Serialized::new(&login)?;
/// let tree = Redactor::try_new(8, ["password"])?.redact(&snapshot)?;
/// assert_eq!(tree.to_string(), r#"{ "user": "alice" }"#);
/// # Ok::<(), redaction_tree::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Serialized {
    value: JsonValue,
}

impl Serialized {
    /// Serializes `value` into a JSON snapshot.
    pub fn new<T>(value: &T) -> Result<Self, Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            value: serde_json::to_value(value)?,
        })
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }

    pub fn into_json(self) -> JsonValue {
        self.value
    }
}

impl From<JsonValue> for Serialized {
    fn from(value: JsonValue) -> Self {
        Self { value }
    }
}

impl Inspect for Serialized {
    fn shape(&self) -> Shape<'_> {
        self.value.shape()
    }
}
