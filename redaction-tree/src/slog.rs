//! Emitting redacted trees and action telemetry through `slog`.
//!
//! Trees are emitted as nested serde values via `slog`'s nested-value support,
//! so structured drains see the same keys and leaves as the rendered string.
//! Only redacted data is ever handed to the serializer.
//!
//! This module does not configure drains or loggers.

use slog::{
    BorrowedKV, Key, Level, Logger, Record, RecordStatic, Result as SlogResult, Serializer,
    Value as SlogValue, KV,
};

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::{
    capture::{
        ActionTelemetry, ResponseBody, ADDITIONAL_CLAIMS, ARGUMENTS, RESPONSE_BODY, USER_CLAIMS,
        USER_ID, USER_ROLES, UNREADABLE_BODY,
    },
    redaction::Tree,
};

/// Message logged by [`ActionTelemetry::log`].
pub const ACTION_MESSAGE: &str = "action executed";

impl SlogValue for Tree {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.to_json());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for ResponseBody {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match self {
            ResponseBody::Captured(tree) => SlogValue::serialize(tree, record, key, serializer),
            ResponseBody::Unreadable => serializer.emit_str(key, UNREADABLE_BODY),
        }
    }
}

/// Emits the recorded properties under their fixed names. Missing values are
/// left out.
///
/// `slog` keys are static, so additional properties are emitted together as
/// one nested object under [`ADDITIONAL_CLAIMS`].
impl KV for ActionTelemetry {
    fn serialize(&self, record: &Record<'_>, serializer: &mut dyn Serializer) -> SlogResult {
        if let Some(arguments) = self.arguments() {
            SlogValue::serialize(arguments, record, Key::from(ARGUMENTS), serializer)?;
        }
        let user = self.user();
        if let Some(user_id) = &user.user_id {
            serializer.emit_str(Key::from(USER_ID), user_id)?;
        }
        if let Some(roles) = &user.roles {
            serializer.emit_str(Key::from(USER_ROLES), roles)?;
        }
        if let Some(claims) = &user.claims {
            SlogValue::serialize(claims, record, Key::from(USER_CLAIMS), serializer)?;
        }
        if let Some(body) = self.response_body() {
            SlogValue::serialize(body, record, Key::from(RESPONSE_BODY), serializer)?;
        }
        let additional: JsonMap<String, JsonValue> = self
            .additional_properties()
            .map(|(name, value)| (name.to_owned(), JsonValue::String(value.to_owned())))
            .collect();
        if !additional.is_empty() {
            let nested = slog::Serde(JsonValue::Object(additional));
            SlogValue::serialize(&nested, record, Key::from(ADDITIONAL_CLAIMS), serializer)?;
        }
        Ok(())
    }
}

impl ActionTelemetry {
    /// Logs the telemetry as a single info record.
    pub fn log(&self, logger: &Logger) {
        static RECORD: RecordStatic<'static> = slog::record_static!(Level::Info, "");
        logger.log(&Record::new(
            &RECORD,
            &format_args!("{ACTION_MESSAGE}"),
            BorrowedKV(self),
        ));
    }
}
