//! Fixed mapping from backend vendor codes to the error taxonomy

use crate::descriptor::{ErrorCode, Severity};
use crate::locale::MessageKey;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One row of the backend code table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRule {
    /// PostgreSQL / PostgREST code reported by the data store
    pub vendor_code: &'static str,
    /// Descriptive name accepted as an equivalent code
    pub alias: &'static str,
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: MessageKey,
}

static RULES: [BackendRule; 6] = [
    BackendRule {
        vendor_code: "23505",
        alias: "unique-constraint-violation",
        code: ErrorCode::UniqueViolation,
        severity: Severity::Low,
        message: MessageKey::UniqueViolation,
    },
    BackendRule {
        vendor_code: "23503",
        alias: "foreign-key-violation",
        code: ErrorCode::ForeignKeyViolation,
        severity: Severity::Medium,
        message: MessageKey::ForeignKeyViolation,
    },
    BackendRule {
        vendor_code: "42501",
        alias: "insufficient-privilege",
        code: ErrorCode::Forbidden,
        severity: Severity::High,
        message: MessageKey::Forbidden,
    },
    BackendRule {
        vendor_code: "PGRST116",
        alias: "row-not-found",
        code: ErrorCode::NotFound,
        severity: Severity::Low,
        message: MessageKey::NotFound,
    },
    BackendRule {
        vendor_code: "PGRST301",
        alias: "session-expired",
        code: ErrorCode::SessionExpired,
        severity: Severity::High,
        message: MessageKey::SessionExpired,
    },
    BackendRule {
        vendor_code: "42P01",
        alias: "undefined-table",
        code: ErrorCode::InternalSchemaError,
        severity: Severity::Medium,
        message: MessageKey::InternalSchemaError,
    },
];

/// Row applied to codes that match nothing above
pub static FALLBACK_RULE: BackendRule = BackendRule {
    vendor_code: "",
    alias: "",
    code: ErrorCode::Unknown,
    severity: Severity::Medium,
    message: MessageKey::ServerError,
};

static RULES_BY_CODE: Lazy<HashMap<&'static str, &'static BackendRule>> = Lazy::new(|| {
    RULES
        .iter()
        .flat_map(|rule| [(rule.vendor_code, rule), (rule.alias, rule)])
        .collect()
});

/// Find the rule for a backend code, matching either the vendor code or its alias
pub fn lookup(code: &str) -> Option<&'static BackendRule> {
    RULES_BY_CODE.get(code.trim()).copied()
}

/// Rule for an optional code, falling back to [`FALLBACK_RULE`]
pub fn rule_for(code: Option<&str>) -> &'static BackendRule {
    code.and_then(lookup).unwrap_or(&FALLBACK_RULE)
}

/// All table rows in display order
pub fn rules() -> &'static [BackendRule] {
    &RULES
}
