//! Translation of raw failures into [`ErrorDescriptor`]s.
//!
//! Pure and synchronous: no I/O, no shared mutable state. Every entry point
//! returns a well-formed descriptor; none of them can fail.

use crate::backend;
use crate::descriptor::{ErrorCode, ErrorDescriptor, Severity};
use crate::failure::{BackendError, Failure};
use crate::locale::{Locale, MessageKey};

/// Trait for failure classification
pub trait ErrorClassifier: Send + Sync {
    /// Map a backend-query failure through the backend code table
    fn classify_backend_error(&self, error: &BackendError, source: Option<&str>) -> ErrorDescriptor;

    /// Classify a transport-level failure; always `NETWORK_ERROR` / `high`
    fn classify_network_error(&self, failure: Failure, source: Option<&str>) -> ErrorDescriptor;

    /// Classify a failure of unknown shape
    fn classify(&self, failure: Failure, source: Option<&str>) -> ErrorDescriptor;
}

/// Default classifier, rendering user messages in a fixed locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    locale: Locale,
}

impl Classifier {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn unknown(&self, failure: Failure, source: Option<&str>) -> ErrorDescriptor {
        let mut builder = ErrorDescriptor::builder(
            failure.message(),
            self.locale.message(MessageKey::Unknown),
        )
        .locale(self.locale)
        .code(ErrorCode::Unknown)
        .severity(Severity::Medium);

        if let Some(source) = source {
            builder = builder.context_entry("source", source);
        }

        builder.cause(failure).build()
    }
}

impl ErrorClassifier for Classifier {
    fn classify_backend_error(&self, error: &BackendError, source: Option<&str>) -> ErrorDescriptor {
        let rule = backend::rule_for(error.code.as_deref());

        let mut builder = ErrorDescriptor::builder(
            error.message.clone(),
            self.locale.message(rule.message),
        )
        .locale(self.locale)
        .code(rule.code)
        .severity(rule.severity);

        let fields = [
            ("backend_code", error.code.as_deref()),
            ("details", error.details.as_deref()),
            ("hint", error.hint.as_deref()),
            ("source", source),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                builder = builder.context_entry(key, value);
            }
        }

        builder.cause(error.clone()).build()
    }

    fn classify_network_error(&self, failure: Failure, source: Option<&str>) -> ErrorDescriptor {
        let mut builder = ErrorDescriptor::builder(
            failure.message(),
            self.locale.message(MessageKey::Network),
        )
        .locale(self.locale)
        .code(ErrorCode::NetworkError)
        .severity(Severity::High);

        if let Some(source) = source {
            builder = builder.context_entry("source", source);
        }

        builder.cause(failure).build()
    }

    fn classify(&self, failure: Failure, source: Option<&str>) -> ErrorDescriptor {
        match failure {
            Failure::Classified(descriptor) => descriptor,
            Failure::Backend(ref error) => self.classify_backend_error(error, source),
            other => self.unknown(other, source),
        }
    }
}

/// [`ErrorClassifier::classify_backend_error`] in the default locale
pub fn classify_backend_error(error: &BackendError, source: Option<&str>) -> ErrorDescriptor {
    Classifier::default().classify_backend_error(error, source)
}

/// [`ErrorClassifier::classify_network_error`] in the default locale
pub fn classify_network_error(failure: impl Into<Failure>, source: Option<&str>) -> ErrorDescriptor {
    Classifier::default().classify_network_error(failure.into(), source)
}

/// [`ErrorClassifier::classify`] in the default locale
pub fn classify(failure: impl Into<Failure>, source: Option<&str>) -> ErrorDescriptor {
    Classifier::default().classify(failure.into(), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_context_keeps_diagnostics() {
        let error = BackendError::new("relation \"meals\" does not exist")
            .with_code("42P01")
            .with_hint("check migrations");

        let descriptor = classify_backend_error(&error, Some("getMealPlan"));

        assert_eq!(descriptor.code(), ErrorCode::InternalSchemaError);
        assert_eq!(descriptor.context().get("backend_code"), Some(&json!("42P01")));
        assert_eq!(descriptor.context().get("hint"), Some(&json!("check migrations")));
        assert_eq!(descriptor.context().get("source"), Some(&json!("getMealPlan")));
        assert!(!descriptor.context().contains_key("details"));
        assert_eq!(descriptor.cause(), Some(&Failure::Backend(error)));
    }

    #[test]
    fn test_backend_error_without_message() {
        let descriptor = classify_backend_error(&BackendError::default(), None);

        assert_eq!(descriptor.message(), "");
        assert_eq!(descriptor.code(), ErrorCode::Unknown);
        assert_eq!(descriptor.severity(), Severity::Medium);
        assert_eq!(descriptor.user_message(), "a server error occurred, please retry");
        assert!(descriptor.context().is_empty());
    }

    #[test]
    fn test_locale_selects_user_message() {
        let classifier = Classifier::new(Locale::He);
        let error = BackendError::new("duplicate key").with_code("23505");

        let descriptor = classifier.classify_backend_error(&error, None);

        assert_eq!(descriptor.user_message(), "רשומה כזו כבר קיימת.");
        assert_eq!(descriptor.severity(), Severity::Low);
    }

    #[test]
    fn test_network_ignores_backend_shape() {
        let failure = Failure::from_value(json!({"message": "socket hang up", "code": "23505"}));

        let descriptor = classify_network_error(failure, Some("syncWorkouts"));

        assert_eq!(descriptor.code(), ErrorCode::NetworkError);
        assert_eq!(descriptor.severity(), Severity::High);
        assert_eq!(descriptor.message(), "socket hang up");
        assert_eq!(descriptor.context().get("source"), Some(&json!("syncWorkouts")));
    }

    #[test]
    fn test_unknown_keeps_cause() {
        let descriptor = classify(json!([1, 2, 3]), None);

        assert_eq!(descriptor.code(), ErrorCode::Unknown);
        assert_eq!(descriptor.message(), "[1,2,3]");
        assert_eq!(descriptor.cause(), Some(&Failure::Value(json!([1, 2, 3]))));
    }
}
