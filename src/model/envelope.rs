/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Response envelope
//!
//! Every CALD endpoint answers with a JSON object. Successful answers carry a
//! `data`, `id` or `token` key depending on the endpoint; failures carry an
//! `error` key. No schema is enforced beyond those presence checks.

use crate::constants::PARSE_ERROR_MESSAGE;
use crate::error::{AppError, CaldResult};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use tracing::warn;

/// Parsed JSON body of a CALD response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Value);

impl Envelope {
    /// Wraps an already parsed JSON value
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parses a raw response body.
    ///
    /// A body that is not valid JSON is not an error at this level: it is
    /// turned into `{"error": "unable to parse json", "text": <body>}` so the
    /// caller handles it like any other error payload.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self(value),
            Err(e) => {
                warn!("Response body is not valid JSON: {}", e);
                Self::parse_failure(body)
            }
        }
    }

    /// Builds the synthesized payload for an unparseable body
    #[must_use]
    pub fn parse_failure(body: &str) -> Self {
        Self(json!({
            "error": PARSE_ERROR_MESSAGE,
            "text": body,
        }))
    }

    /// Returns true when the body carries an `error` key
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0.get("error").is_some()
    }

    /// Returns the raw `error` value, if any
    #[must_use]
    pub fn error(&self) -> Option<&Value> {
        self.0.get("error")
    }

    /// Returns the `error` value rendered as text
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| match e {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Looks up a top level key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the `data` field, if any
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// Borrows the underlying JSON value
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the envelope and returns the underlying JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Converts an error payload into `AppError::Api`, passing success through
    pub fn into_result(self) -> CaldResult<Self> {
        if self.is_error() {
            Err(AppError::Api(self))
        } else {
            Ok(self)
        }
    }

    /// Takes the value stored under `key`, failing when it is missing
    pub fn take(self, key: &str) -> CaldResult<Value> {
        match self.0 {
            Value::Object(mut map) => map
                .remove(key)
                .ok_or_else(|| AppError::Deserialization(format!("missing field `{key}`"))),
            other => Err(AppError::Deserialization(format!(
                "expected a JSON object with `{key}`, got {other}"
            ))),
        }
    }

    /// Returns `data` when present, otherwise the whole body
    #[must_use]
    pub fn into_payload(self) -> Value {
        match self.0 {
            Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        }
    }
}

impl From<Value> for Envelope {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
