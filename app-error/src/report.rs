use crate::descriptor::{ErrorDescriptor, Severity};
use tracing::Level;

/// Tracing level a descriptor of the given severity is reported at
pub fn log_level(severity: Severity) -> Level {
    match severity {
        Severity::Low => Level::DEBUG,
        Severity::Medium => Level::WARN,
        Severity::High | Severity::Critical => Level::ERROR,
    }
}

/// Emit a log event for a descriptor at or above `min_severity`.
///
/// Returns whether an event was emitted. Nothing is retained.
pub fn report(descriptor: &ErrorDescriptor, min_severity: Severity) -> bool {
    if descriptor.severity() < min_severity {
        return false;
    }

    let code = descriptor.code().as_str();
    let severity = descriptor.severity().as_str();
    let message = descriptor.message();
    let context = descriptor
        .context()
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ");

    let level = log_level(descriptor.severity());
    if level == Level::DEBUG {
        tracing::debug!(code, severity, context, "{}", message);
    } else if level == Level::WARN {
        tracing::warn!(code, severity, context, "{}", message);
    } else {
        tracing::error!(code, severity, context, "{}", message);
    }

    true
}
