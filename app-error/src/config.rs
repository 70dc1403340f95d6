use crate::classifier::Classifier;
use crate::descriptor::Severity;
use crate::error::{ConfigError, Result, ResultExt};
use crate::locale::Locale;
use serde::Deserialize;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "apperror.toml";

/// Configuration options for classification and reporting
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Locale user messages are rendered in
    pub locale: Locale,
    /// Descriptors below this severity are not reported
    pub min_report_severity: Severity,
    /// Call-site label used when the caller supplies none
    pub default_source: Option<String>,
}

impl ClassifierConfig {
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.locale)
    }

    /// Source label to record, preferring the caller's own
    pub fn source<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.default_source.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(source) = &self.default_source {
            if source.trim().is_empty() {
                return Err(ConfigError::invalid_config(
                    "default_source must not be empty when set",
                ));
            }
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with existence and content checks
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }
}

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ConfigError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: ClassifierConfig = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ConfigError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?;

        let config: ClassifierConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path_ref.display()))?;

        config.validate()?;
        tracing::debug!(path = %path_ref.display(), locale = %config.locale, "loaded classifier config");

        Ok(config)
    }
}
