use std::path::{Path, PathBuf};

use app_error::backend::{self, BackendRule};
use app_error::{Locale, Severity};
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement,
    Table,
};

use crate::classify::load_config;
use crate::error::Result;
use crate::ui;

const HEADERS: [&str; 4] = ["code / alias", "ErrorCode", "severity", "user message"];

pub fn execute(locale: Option<Locale>, config: Option<PathBuf>) -> Result<()> {
    let locale = resolve_locale(locale, config.as_deref())?;

    ui::section_header(&format!("Backend error codes ({})", locale));
    println!("{}", render_table(locale, None));

    Ok(())
}

/// Flag wins over the configured locale
fn resolve_locale(explicit: Option<Locale>, config: Option<&Path>) -> Result<Locale> {
    match explicit {
        Some(locale) => Ok(locale),
        None => Ok(load_config(config)?.locale),
    }
}

/// Backend code table, fallback row last. Without a width the terminal width is used.
fn render_table(locale: Locale, width: Option<u16>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(width) = width {
        table.set_width(width);
    }

    table.set_header(
        HEADERS
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for rule in backend::rules() {
        table.add_row(rule_cells(rule, locale));
    }
    table.add_row(rule_cells(&backend::FALLBACK_RULE, locale));

    table.to_string()
}

fn rule_cells(rule: &BackendRule, locale: Locale) -> Vec<Cell> {
    let codes = if rule.vendor_code.is_empty() {
        "(unrecognized)".to_string()
    } else {
        format!("{} / {}", rule.vendor_code, rule.alias)
    };

    vec![
        Cell::new(codes),
        Cell::new(rule.code.as_str()),
        Cell::new(rule.severity.as_str()).fg(severity_color(rule.severity)),
        Cell::new(locale.message(rule.message)),
    ]
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Green,
        Severity::Medium => Color::Yellow,
        Severity::High | Severity::Critical => Color::Red,
    }
}
