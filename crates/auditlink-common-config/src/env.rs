//! Environment variable handling.

use crate::types::AuditSettings;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Client settings
    pub const AUDIT_GATEWAY_URL: &str = "AUDIT_GATEWAY_URL";
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    pub const AUDIT_ENABLED: &str = "AUDIT_ENABLED";
    pub const AUDIT_TIMEOUT: &str = "AUDIT_TIMEOUT";
    pub const AUDIT_MASK_PII: &str = "AUDIT_MASK_PII";
    pub const AUDIT_MAX_PAYLOAD_BYTES: &str = "AUDIT_MAX_PAYLOAD_BYTES";

    // Tooling
    pub const AUDITLINK_CONFIG: &str = "AUDITLINK_CONFIG";
    pub const AUDITLINK_LOG_LEVEL: &str = "AUDITLINK_LOG_LEVEL";
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Load `.env`, `.env.local` and `.env.<ENVIRONMENT>` from the working
    /// directory. See [`init_in`](Self::init_in).
    pub fn init() -> Result<Self, EnvError> {
        Self::init_in(".")
    }

    /// Load `.env`, `.env.local` and `.env.<ENVIRONMENT>` from `dir`.
    /// Missing files are ignored but malformed ones are an error; variables
    /// already set in the process are never overwritten.
    pub fn init_in(dir: impl AsRef<Path>) -> Result<Self, EnvError> {
        let dir = dir.as_ref();
        load_optional(&dir.join(".env"))?;
        load_optional(&dir.join(".env.local"))?;

        if let Ok(environment) = env::var(vars::ENVIRONMENT) {
            load_optional(&dir.join(format!(".env.{}", environment)))?;
        }

        Ok(Self { _guard: () })
    }

    /// Get an optional string variable. Empty values count as unset.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok().filter(|v| !v.is_empty())
    }

    /// Get a variable with a default value.
    pub fn get_or(var: &str, default: &str) -> String {
        Self::get(var).unwrap_or_else(|| default.to_string())
    }

    /// Get a boolean variable.
    pub fn get_bool(var: &str) -> Option<bool> {
        Self::get(var).map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
    }

    /// Get a numeric variable.
    pub fn get_int<T: std::str::FromStr>(var: &str) -> Result<Option<T>, EnvError> {
        match Self::get(var) {
            Some(v) => v.trim().parse().map(Some).map_err(|_| EnvError::InvalidValue {
                var: var.to_string(),
                message: format!("expected a number, got {v:?}"),
            }),
            None => Ok(None),
        }
    }
}

fn load_optional(path: &Path) -> Result<(), EnvError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl AuditSettings {
    /// Overlay settings from environment variables.
    pub fn apply_env(mut self) -> Result<Self, EnvError> {
        if let Some(url) = Environment::get(vars::AUDIT_GATEWAY_URL) {
            self.gateway_url = url;
        }
        if let Some(name) = Environment::get(vars::SERVICE_NAME) {
            self.service_name = name;
        }
        if let Some(enabled) = Environment::get_bool(vars::AUDIT_ENABLED) {
            self.enabled = enabled;
        }
        if let Some(timeout) = Environment::get_int::<f64>(vars::AUDIT_TIMEOUT)? {
            self.timeout_secs = timeout;
        }
        if let Some(mask) = Environment::get_bool(vars::AUDIT_MASK_PII) {
            self.mask_pii = mask;
        }
        if let Some(max) = Environment::get_int::<usize>(vars::AUDIT_MAX_PAYLOAD_BYTES)? {
            self.max_payload_bytes = Some(max);
        }
        Ok(self)
    }

    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Result<Self, EnvError> {
        Self::default().apply_env()
    }
}
