//! Tagged representation of a failure observed by calling code.
//!
//! The "is this a backend-query failure" check happens exactly once, in
//! [`Failure::from_value`]. Everything downstream matches on the variant.

use crate::descriptor::ErrorDescriptor;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Keys whose presence next to `message` marks a JSON object as a backend-query failure
const BACKEND_MARKER_KEYS: [&str; 3] = ["code", "details", "hint"];

/// Structured failure returned by the data store's query layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BackendError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    /// Free-form `error` text some endpoints send next to `message`
    #[serde(default)]
    pub error: Option<String>,
    /// Set when the raw `message` was present but not a string
    #[serde(skip)]
    non_text_message: bool,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Whether `message` came from a string rather than a stringified value
    pub fn has_text_message(&self) -> bool {
        !self.non_text_message
    }
}

/// Any failure value a caller may hand to the classifier
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Already classified; passes through classification unchanged
    Classified(ErrorDescriptor),
    /// Backend-query failure carrying a vendor code
    Backend(BackendError),
    /// Failure that exposes a textual description
    Error { message: String },
    /// Anything else, including null, primitives and malformed objects
    Value(Value),
}

impl Failure {
    /// Sort an arbitrary JSON value into its failure category
    pub fn from_value(value: Value) -> Self {
        let Value::Object(object) = value else {
            return Failure::Value(value);
        };

        if object.contains_key("message")
            && BACKEND_MARKER_KEYS.iter().any(|key| object.contains_key(*key))
        {
            return Failure::Backend(BackendError {
                message: text_field(&object, "message").unwrap_or_default(),
                code: text_field(&object, "code"),
                details: text_field(&object, "details"),
                hint: text_field(&object, "hint"),
                error: object.get("error").and_then(Value::as_str).map(str::to_string),
                non_text_message: !matches!(object.get("message"), Some(Value::String(_))),
            });
        }

        match object.get("message") {
            Some(Value::String(message)) => Failure::Error {
                message: message.clone(),
            },
            _ => Failure::Value(Value::Object(object)),
        }
    }

    /// Wrap a Rust error, keeping only its textual description
    pub fn from_error(error: &(dyn std::error::Error + '_)) -> Self {
        Failure::Error {
            message: error.to_string(),
        }
    }

    /// Best-effort diagnostic text for this failure
    pub fn message(&self) -> String {
        match self {
            Failure::Classified(descriptor) => descriptor.message().to_string(),
            Failure::Backend(error) => error.message.clone(),
            Failure::Error { message } => message.clone(),
            Failure::Value(Value::String(text)) => text.clone(),
            Failure::Value(other) => other.to_string(),
        }
    }

    /// Vendor code carried by the failure, if any
    pub fn backend_code(&self) -> Option<&str> {
        match self {
            Failure::Backend(error) => error.code.as_deref(),
            Failure::Value(Value::Object(object)) => object.get("code").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Read a field as text: strings verbatim, null as absent, anything else as compact JSON
fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl From<ErrorDescriptor> for Failure {
    fn from(descriptor: ErrorDescriptor) -> Self {
        Failure::Classified(descriptor)
    }
}

impl From<BackendError> for Failure {
    fn from(error: BackendError) -> Self {
        Failure::Backend(error)
    }
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Failure::from_value(value)
    }
}

impl From<&str> for Failure {
    fn from(text: &str) -> Self {
        Failure::Value(Value::String(text.to_string()))
    }
}

impl From<String> for Failure {
    fn from(text: String) -> Self {
        Failure::Value(Value::String(text))
    }
}
