//! Behavioral tests for failure classification
//!
//! Exercises the public entry points the way data-access call sites use them.

use app_error::{
    backend, classify, classify_backend_error, classify_network_error, BackendError, Classifier,
    ClassifierConfig, ErrorClassifier, ErrorCode, Failure, Locale, Severity,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn backend_failure(message: &str, code: &str) -> Value {
    json!({ "message": message, "code": code })
}

// =============================================================================
// BACKEND CODE TABLE
// =============================================================================

#[cfg(test)]
mod backend_table_tests {
    use super::*;

    #[test]
    fn test_each_row_by_alias() {
        let expected = [
            ("unique-constraint-violation", ErrorCode::UniqueViolation, Severity::Low, "a record like this already exists"),
            ("foreign-key-violation", ErrorCode::ForeignKeyViolation, Severity::Medium, "cannot complete: linked data exists"),
            ("insufficient-privilege", ErrorCode::Forbidden, Severity::High, "not authorized for this action"),
            ("row-not-found", ErrorCode::NotFound, Severity::Low, "requested data not found"),
            ("session-expired", ErrorCode::SessionExpired, Severity::High, "session expired, please re-authenticate"),
            ("undefined-table", ErrorCode::InternalSchemaError, Severity::Medium, "internal error: table missing"),
        ];

        for (code, error_code, severity, user_message) in expected {
            let descriptor = classify(backend_failure("failure", code), None);
            assert_eq!(descriptor.code(), error_code, "code for {}", code);
            assert_eq!(descriptor.severity(), severity, "severity for {}", code);
            assert_eq!(descriptor.user_message(), user_message, "message for {}", code);
        }
    }

    #[test]
    fn test_each_row_by_vendor_code() {
        for rule in backend::rules() {
            let descriptor = classify(backend_failure("failure", rule.vendor_code), None);
            assert_eq!(descriptor.code(), rule.code);
            assert_eq!(descriptor.severity(), rule.severity);
        }
    }

    #[test]
    fn test_unrecognized_codes() {
        let inputs = [
            json!({ "message": "odd", "code": "XX000" }),
            json!({ "message": "odd", "code": "" }),
            json!({ "message": "odd", "code": null }),
            json!({ "message": "odd", "details": "no code at all" }),
        ];

        for input in inputs {
            let descriptor = classify(input.clone(), None);
            assert_eq!(descriptor.code(), ErrorCode::Unknown, "input {}", input);
            assert_eq!(descriptor.severity(), Severity::Medium);
            assert_eq!(descriptor.user_message(), "a server error occurred, please retry");
        }
    }

    #[test]
    fn test_same_code_always_same_classification() {
        let first = classify(backend_failure("one", "23503"), Some("deleteTrainee"));
        let second = classify(backend_failure("two", "23503"), None);

        assert_eq!(first.code(), second.code());
        assert_eq!(first.severity(), second.severity());
        assert_eq!(first.user_message(), second.user_message());
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

#[cfg(test)]
mod entry_point_tests {
    use super::*;

    #[test]
    fn test_duplicate_key_example() {
        let descriptor = classify(backend_failure("duplicate key", "unique-constraint-violation"), None);

        assert_eq!(descriptor.code(), ErrorCode::UniqueViolation);
        assert_eq!(descriptor.severity(), Severity::Low);
        assert_eq!(descriptor.user_message(), "a record like this already exists");
        assert_eq!(descriptor.message(), "duplicate key");
    }

    #[test]
    fn test_permission_denied_example() {
        let descriptor = classify(backend_failure("permission denied", "insufficient-privilege"), None);

        assert_eq!(descriptor.code(), ErrorCode::Forbidden);
        assert_eq!(descriptor.severity(), Severity::High);
    }

    #[test]
    fn test_network_error_example() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "fetch failed");
        let descriptor = classify_network_error(Failure::from_error(&io), Some("loadWorkouts"));

        assert_eq!(descriptor.code(), ErrorCode::NetworkError);
        assert_eq!(descriptor.severity(), Severity::High);
        assert_eq!(descriptor.message(), "fetch failed");
    }

    #[test]
    fn test_network_severity_is_independent_of_input() {
        let inputs: Vec<Failure> = vec![
            Failure::from(""),
            Failure::from_value(Value::Null),
            Failure::from_value(json!({ "message": "x", "code": "23505" })),
            Failure::from(classify(backend_failure("x", "PGRST116"), None)),
        ];

        for input in inputs {
            let descriptor = classify_network_error(input, None);
            assert_eq!(descriptor.code(), ErrorCode::NetworkError);
            assert_eq!(descriptor.severity(), Severity::High);
        }
    }

    #[test]
    fn test_plain_string_example() {
        let descriptor = classify("just a string", None);

        assert_eq!(descriptor.code(), ErrorCode::Unknown);
        assert_eq!(descriptor.severity(), Severity::Medium);
        assert_eq!(descriptor.message(), "just a string");
        assert_eq!(descriptor.user_message(), "an error occurred, please try again");
    }

    #[test]
    fn test_classified_descriptor_passes_through() {
        let original = classify_backend_error(
            &BackendError::new("duplicate key").with_code("23505"),
            Some("createMealPlan"),
        );

        let again = classify(original.clone(), Some("another-call-site"));

        assert_eq!(again, original);
        assert_eq!(again.context().get("source"), Some(&json!("createMealPlan")));
    }

    #[test]
    fn test_never_panics_on_odd_values() {
        let inputs = [
            Value::Null,
            json!(0),
            json!(-1.5),
            json!(false),
            json!(""),
            json!([]),
            json!({}),
            json!({ "message": { "nested": true } }),
            json!({ "code": 23505 }),
            json!({ "message": null, "hint": 7 }),
        ];

        for input in inputs {
            let descriptor = classify(input, None);
            assert!(!descriptor.user_message().is_empty());
        }
    }
}

// =============================================================================
// CONFIGURED CLASSIFIER
// =============================================================================

#[cfg(test)]
mod configured_tests {
    use super::*;

    #[test]
    fn test_classifier_from_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apperror.toml");
        fs::write(
            &path,
            "locale = \"he\"\nmin_report_severity = \"high\"\ndefault_source = \"trainee-app\"\n",
        )
        .unwrap();

        let config = ClassifierConfig::load_with_validation(&path).unwrap();
        let classifier = config.classifier();
        let descriptor = classifier.classify(
            Failure::from_value(backend_failure("JWT expired", "PGRST301")),
            config.source(None),
        );

        assert_eq!(config.min_report_severity, Severity::High);
        assert_eq!(descriptor.code(), ErrorCode::SessionExpired);
        assert_eq!(descriptor.user_message(), "תוקף ההתחברות פג. אנא התחבר מחדש.");
        assert_eq!(descriptor.context().get("source"), Some(&json!("trainee-app")));
    }

    #[test]
    fn test_classifier_is_shareable_across_threads() {
        let classifier = Classifier::new(Locale::En);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    classifier
                        .classify(Failure::from_value(backend_failure("dup", "23505")), None)
                        .severity()
                        == Severity::Low
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
