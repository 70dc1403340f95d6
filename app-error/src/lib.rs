//! App Error - classification of application failures
//!
//! Maps backend-query failures, network failures and values of unknown shape
//! into immutable [`ErrorDescriptor`]s carrying a machine code, a severity and
//! a localized user message.

// Core modules
pub mod descriptor;
pub mod error;
pub mod failure;

// Classification
pub mod backend;
pub mod classifier;
pub mod locale;

// Caller-side helpers
pub mod api;
pub mod config;
pub mod report;

// Re-export main types for convenience
pub use api::{extract_api_message, handle_api_error, ApiErrorOptions};
pub use backend::BackendRule;
pub use classifier::{
    classify, classify_backend_error, classify_network_error, Classifier, ErrorClassifier,
};
pub use config::{ClassifierConfig, ConfigLoader, DefaultConfigLoader, CONFIG_FILE_NAME};
pub use descriptor::{Context, ErrorCode, ErrorDescriptor, ErrorDescriptorBuilder, Severity};
pub use error::{ConfigError, Result};
pub use failure::{BackendError, Failure};
pub use locale::{Locale, MessageKey};
pub use report::report;
