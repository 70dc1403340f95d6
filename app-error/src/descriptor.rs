use crate::failure::Failure;
use crate::locale::{Locale, MessageKey};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Advisory diagnostic values attached to a descriptor
pub type Context = BTreeMap<String, serde_json::Value>;

/// How aggressively a caller should log or alert on an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!(
                "unknown severity '{}', expected one of: low, medium, high, critical",
                other
            )),
        }
    }
}

/// Machine-readable error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    UniqueViolation,
    ForeignKeyViolation,
    Forbidden,
    NotFound,
    SessionExpired,
    InternalSchemaError,
    NetworkError,
    #[default]
    Unknown,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::UniqueViolation,
        ErrorCode::ForeignKeyViolation,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::SessionExpired,
        ErrorCode::InternalSchemaError,
        ErrorCode::NetworkError,
        ErrorCode::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UniqueViolation => "UNIQUE_VIOLATION",
            ErrorCode::ForeignKeyViolation => "FOREIGN_KEY_VIOLATION",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::SessionExpired => "SESSION_EXPIRED",
            ErrorCode::InternalSchemaError => "INTERNAL_SCHEMA_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable, user-facing description of a classified failure.
///
/// `message` is the developer-facing diagnostic text and is never meant for
/// display; `user_message` is localized and always non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDescriptor {
    message: String,
    user_message: String,
    code: ErrorCode,
    severity: Severity,
    context: Context,
    cause: Option<Box<Failure>>,
}

impl ErrorDescriptor {
    /// Start building a descriptor. Code defaults to `UNKNOWN`, severity to `medium`.
    pub fn builder(
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> ErrorDescriptorBuilder {
        ErrorDescriptorBuilder {
            message: message.into(),
            user_message: user_message.into(),
            code: ErrorCode::default(),
            severity: Severity::default(),
            context: Context::new(),
            cause: None,
            locale: Locale::default(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn cause(&self) -> Option<&Failure> {
        self.cause.as_deref()
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorDescriptor {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.cause.as_deref() {
            Some(Failure::Classified(inner)) => Some(inner),
            _ => None,
        }
    }
}

/// Consuming builder for [`ErrorDescriptor`]
#[derive(Debug, Clone)]
pub struct ErrorDescriptorBuilder {
    message: String,
    user_message: String,
    code: ErrorCode,
    severity: Severity,
    context: Context,
    cause: Option<Box<Failure>>,
    locale: Locale,
}

impl ErrorDescriptorBuilder {
    /// Locale of the generic message substituted for an empty user message
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn context_entry(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context.extend(context);
        self
    }

    pub fn cause(mut self, cause: impl Into<Failure>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    pub fn build(self) -> ErrorDescriptor {
        let user_message = if self.user_message.trim().is_empty() {
            self.locale.message(MessageKey::Unknown).to_string()
        } else {
            self.user_message
        };

        ErrorDescriptor {
            message: self.message,
            user_message,
            code: self.code,
            severity: self.severity,
            context: self.context,
            cause: self.cause,
        }
    }
}
