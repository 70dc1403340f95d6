use app_error::Severity;
use colored::{ColoredString, Colorize};

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print an aligned `label: value` line
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<14} {}", format!("{}:", label).bright_white(), value);
}

/// Severity rendered in the color callers associate with its urgency
pub fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Low => severity.as_str().green(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::High => severity.as_str().red(),
        Severity::Critical => severity.as_str().red().bold(),
    }
}
