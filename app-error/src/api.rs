//! Helpers for data-access call sites that only need a message string back

use crate::failure::Failure;
use crate::locale::{Locale, MessageKey};
use serde_json::Value;
use std::collections::BTreeMap;

/// Options for [`handle_api_error`]
#[derive(Debug, Clone)]
pub struct ApiErrorOptions {
    /// Returned when no message can be extracted
    pub default_message: String,
    /// Call-site label for logging, e.g. the data-access function name
    pub context: String,
    pub additional_info: BTreeMap<String, Value>,
    /// Emit a log event for failures that carry a backend code
    pub log_backend_error: bool,
    pub locale: Locale,
}

impl ApiErrorOptions {
    pub fn new(default_message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            default_message: default_message.into(),
            context: context.into(),
            additional_info: BTreeMap::new(),
            log_backend_error: true,
            locale: Locale::default(),
        }
    }

    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_info.insert(key.into(), value.into());
        self
    }

    pub fn without_logging(mut self) -> Self {
        self.log_backend_error = false;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Extract a displayable message from a failure of any shape
///
/// Objects are only consulted when they carry a `message` key: a string
/// `message` wins, otherwise a string `error` field is used.
pub fn extract_api_message(failure: &Failure, locale: Locale) -> String {
    let unknown = || locale.message(MessageKey::UnknownApiError).to_string();

    match failure {
        Failure::Classified(descriptor) => descriptor.message().to_string(),
        Failure::Backend(error) if error.has_text_message() => error.message.clone(),
        Failure::Backend(error) => error.error.clone().unwrap_or_else(unknown),
        Failure::Error { message } => message.clone(),
        Failure::Value(Value::String(text)) => text.clone(),
        Failure::Value(Value::Object(object)) if object.contains_key("message") => object
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| object.get("error").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(unknown),
        Failure::Value(_) => unknown(),
    }
}

/// Log a backend failure when asked to and return the message to show the caller
pub fn handle_api_error(failure: &Failure, options: &ApiErrorOptions) -> String {
    if options.log_backend_error {
        if let Some(code) = failure.backend_code() {
            let (details, hint) = match failure {
                Failure::Backend(error) => (error.details.as_deref(), error.hint.as_deref()),
                _ => (None, None),
            };
            let additional_info = Value::Object(
                options
                    .additional_info
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            );

            tracing::error!(
                context = %options.context,
                code,
                details = details.unwrap_or_default(),
                hint = hint.unwrap_or_default(),
                additional_info = %additional_info,
                "backend error: {}",
                failure.message()
            );
        }
    }

    let message = extract_api_message(failure, options.locale);
    if message.is_empty() {
        options.default_message.clone()
    } else {
        message
    }
}
