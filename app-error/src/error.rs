use std::path::PathBuf;
use std::result;
use thiserror::Error;

/// Failures while loading classifier configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<ConfigError>),
}

impl ConfigError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        ConfigError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        ConfigError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::ConfigNotFound { path } => format!(
                "Configuration file not found at {}. Create it or pass --config",
                path.display()
            ),
            ConfigError::Parse(e) => format!("Configuration file is not valid TOML: {}", e),
            ConfigError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = result::Result<T, ConfigError>;

// Helper trait for adding context to results
pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for result::Result<T, E>
where
    E: Into<ConfigError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let config_err: ConfigError = err.into();
            config_err.with_context(context())
        })
    }
}
