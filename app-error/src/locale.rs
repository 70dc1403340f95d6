use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Display locale for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

/// Every user-facing text the classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    UniqueViolation,
    ForeignKeyViolation,
    Forbidden,
    NotFound,
    SessionExpired,
    InternalSchemaError,
    /// Backend failure with an unrecognized or missing code
    ServerError,
    Network,
    Unknown,
    /// Fallback when no message can be extracted from an API failure
    UnknownApiError,
}

impl MessageKey {
    pub const ALL: [MessageKey; 10] = [
        MessageKey::UniqueViolation,
        MessageKey::ForeignKeyViolation,
        MessageKey::Forbidden,
        MessageKey::NotFound,
        MessageKey::SessionExpired,
        MessageKey::InternalSchemaError,
        MessageKey::ServerError,
        MessageKey::Network,
        MessageKey::Unknown,
        MessageKey::UnknownApiError,
    ];
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    pub fn message(&self, key: MessageKey) -> &'static str {
        match self {
            Locale::En => english(key),
            Locale::He => hebrew(key),
        }
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UniqueViolation => "a record like this already exists",
        MessageKey::ForeignKeyViolation => "cannot complete: linked data exists",
        MessageKey::Forbidden => "not authorized for this action",
        MessageKey::NotFound => "requested data not found",
        MessageKey::SessionExpired => "session expired, please re-authenticate",
        MessageKey::InternalSchemaError => "internal error: table missing",
        MessageKey::ServerError => "a server error occurred, please retry",
        MessageKey::Network => "network error, check your internet connection and try again",
        MessageKey::Unknown => "an error occurred, please try again",
        MessageKey::UnknownApiError => "unknown error",
    }
}

fn hebrew(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UniqueViolation => "רשומה כזו כבר קיימת.",
        MessageKey::ForeignKeyViolation => "לא ניתן לבצע את הפעולה - קיים קשר לנתונים אחרים.",
        MessageKey::Forbidden => "אין לך הרשאה לבצע פעולה זו.",
        MessageKey::NotFound => "הנתונים המבוקשים לא נמצאו.",
        MessageKey::SessionExpired => "תוקף ההתחברות פג. אנא התחבר מחדש.",
        MessageKey::InternalSchemaError => "שגיאה פנימית - טבלה לא קיימת.",
        MessageKey::ServerError => "אירעה שגיאה בשרת. נסה שוב.",
        MessageKey::Network => "שגיאת תקשורת. בדוק את החיבור לאינטרנט ונסה שוב.",
        MessageKey::Unknown => "אירעה שגיאה. נסה שוב.",
        MessageKey::UnknownApiError => "שגיאה לא ידועה",
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "he" => Ok(Locale::He),
            other => Err(format!("unsupported locale '{}', expected 'en' or 'he'", other)),
        }
    }
}
