use std::io::{self, Read};
use std::path::{Path, PathBuf};

use app_error::{
    ClassifierConfig, ErrorClassifier, ErrorDescriptor, Failure, Locale, CONFIG_FILE_NAME,
};
use serde_json::Value;

use crate::error::{CliError, Result, ResultExt};
use crate::ui;

pub fn execute(
    input: Option<String>,
    network: bool,
    source: Option<String>,
    locale: Option<Locale>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut config = load_config(config.as_deref())?;
    if let Some(locale) = locale {
        config.locale = locale;
    }

    let raw = match input.as_deref() {
        Some(text) if text != "-" => text.to_string(),
        _ => read_stdin()?,
    };
    if raw.trim().is_empty() {
        return Err(CliError::Other(
            "No failure given on the command line or stdin".to_string(),
        ));
    }
    let failure = parse_failure(&raw);

    tracing::debug!(kind = failure_kind(&failure), "classifying failure");
    if verbose {
        ui::info_message(&format!("Parsed input as {}", failure_kind(&failure)));
    }
    if network && matches!(failure, Failure::Backend(_)) {
        ui::warning_message("Input looks like a backend-query failure but --network was given");
    }

    let classifier = config.classifier();
    let source = config.source(source.as_deref());
    let descriptor = if network {
        classifier.classify_network_error(failure, source)
    } else {
        classifier.classify(failure, source)
    };

    print_descriptor(&descriptor);

    if !app_error::report(&descriptor, config.min_report_severity) && verbose {
        ui::info_message(&format!(
            "Not reported: severity {} is below {}",
            descriptor.severity(),
            config.min_report_severity
        ));
    }

    Ok(())
}

/// Explicit path, else `apperror.toml` in the working directory, else defaults
pub(crate) fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => ClassifierConfig::load_with_validation(path)
            .with_context(|| "Could not load configuration"),
        None if Path::new(CONFIG_FILE_NAME).exists() => {
            ClassifierConfig::load_with_validation(CONFIG_FILE_NAME)
                .with_context(|| "Could not load configuration")
        }
        None => Ok(ClassifierConfig::default()),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| "Failed to read failure from stdin")?;
    Ok(buffer)
}

/// JSON input is sorted into a failure category; anything else is a plain string value
fn parse_failure(raw: &str) -> Failure {
    let trimmed = raw.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => Failure::from_value(value),
        Err(_) => Failure::from(trimmed),
    }
}

fn failure_kind(failure: &Failure) -> &'static str {
    match failure {
        Failure::Classified(_) => "classified descriptor",
        Failure::Backend(_) => "backend-query failure",
        Failure::Error { .. } => "error with message",
        Failure::Value(_) => "unrecognized value",
    }
}

fn print_descriptor(descriptor: &ErrorDescriptor) {
    ui::section_header(descriptor.code().as_str());
    ui::field("severity", ui::severity_label(descriptor.severity()));
    ui::field("user message", descriptor.user_message());
    ui::field("message", descriptor.message());

    if descriptor.context().is_empty() {
        return;
    }
    ui::field("context", "");
    for (key, value) in descriptor.context() {
        let value = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        println!("    {} = {}", key, value);
    }
}
