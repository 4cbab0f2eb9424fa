//! Redaction of JSON response bodies.

use std::fmt;

use crate::redaction::Tree;
#[cfg(feature = "serde")]
use crate::redaction::Redactor;

/// Logged in place of a body that is not a JSON object.
pub const UNREADABLE_BODY: &str = "Failure to deserialize response body";

/// The logged form of a response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    Captured(Tree),
    Unreadable,
}

impl ResponseBody {
    /// Parses and redacts `body`.
    ///
    /// Returns `None` for an empty body or JSON `null`. A JSON object is
    /// redacted with `redactor`; any other input is [`ResponseBody::Unreadable`].
    #[cfg(feature = "serde")]
    pub fn capture(body: &str, redactor: &Redactor) -> Option<Self> {
        use serde_json::Value as JsonValue;

        if body.trim().is_empty() {
            return None;
        }
        let captured = match serde_json::from_str::<JsonValue>(body) {
            Ok(JsonValue::Null) => return None,
            Ok(value @ JsonValue::Object(_)) => redactor
                .redact(&value)
                .map_or(Self::Unreadable, Self::Captured),
            Ok(_) | Err(_) => Self::Unreadable,
        };
        Some(captured)
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Self::Captured(tree) => Some(tree),
            Self::Unreadable => None,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Captured(tree) => fmt::Display::fmt(tree, f),
            Self::Unreadable => f.write_str(UNREADABLE_BODY),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{ResponseBody, UNREADABLE_BODY};
    use crate::{ExclusionSet, Redactor};

    fn capture(body: &str) -> Option<ResponseBody> {
        ResponseBody::capture(body, &Redactor::default())
    }

    #[test]
    fn objects_are_redacted() {
        let body = capture(r#"{"id": 7, "token": "abc", "items": [1, 2]}"#).unwrap();
        assert_eq!(body.to_string(), r#"{ "id": "7", "items": [ "1", "2" ] }"#);
    }

    #[test]
    fn empty_and_null_bodies_yield_nothing() {
        assert_eq!(capture(""), None);
        assert_eq!(capture("  \n"), None);
        assert_eq!(capture("null"), None);
    }

    #[test]
    fn non_objects_are_unreadable() {
        for body in ["[1, 2]", "\"text\"", "42", "{not json"] {
            let captured = capture(body).unwrap();
            assert_eq!(captured, ResponseBody::Unreadable);
            assert_eq!(captured.to_string(), UNREADABLE_BODY);
        }
    }

    #[test]
    fn body_respects_redactor_depth() {
        let redactor = Redactor::new(1, ExclusionSet::empty());
        let body = ResponseBody::capture(r#"{"id": 1, "nested": {"a": 1}}"#, &redactor).unwrap();
        assert_eq!(body.to_string(), r#"{ "id": "1" }"#);
        assert!(body.as_tree().is_some());
    }
}
