//! Configuration file loading and parsing.

use crate::env::EnvError;
use crate::types::AuditSettings;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Location of the config file relative to the project directory.
pub const CONFIG_FILE: &str = ".auditlink/config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error(
        "invalid YAML at line {}: {message}",
        line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string())
    )]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error(transparent)]
    Env(#[from] EnvError),
}

fn env_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env reference pattern must compile")
    })
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the project config file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_FILE)
    }

    /// Load the project config file, or defaults if there is none.
    pub fn load(&self) -> Result<AuditSettings, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            return Ok(AuditSettings::default());
        }

        self.load_file(&config_path)
    }

    /// Load an explicit config file. Unlike [`load`](Self::load), a missing
    /// file is an error.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<AuditSettings, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let expanded = expand_env_vars(&contents)?;

        // An empty file deserializes to null; treat it as all defaults.
        if expanded.trim().is_empty() {
            return Ok(AuditSettings::default());
        }

        let settings: AuditSettings =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&settings)?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self, settings: &AuditSettings) -> Result<(), ConfigError> {
        if settings.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "service_name must not be empty".to_string(),
            });
        }

        let url = url::Url::parse(&settings.gateway_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("gateway_url is not a valid URL: {e}"),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("gateway_url must use http or https, got {}", url.scheme()),
            });
        }

        if !(settings.timeout_secs.is_finite() && settings.timeout_secs > 0.0) {
            return Err(ConfigError::ValidationError {
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }

        if settings.max_payload_bytes == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "max_payload_bytes must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Save settings to the project config file.
    pub fn save(&self, settings: &AuditSettings) -> Result<(), ConfigError> {
        let config_path = self.config_path();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(settings).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(config_path, yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Expand `${VAR}` and `${VAR:-default}` references.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for cap in env_ref_pattern().captures_iter(content) {
        let Some(full) = cap.get(0) else { continue };
        let var_name = &cap[1];

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match cap.get(2) {
                Some(default) => default.as_str().to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result.push_str(&content[last..full.start()]);
        result.push_str(&value);
        last = full.end();
    }

    result.push_str(&content[last..]);
    Ok(result)
}
