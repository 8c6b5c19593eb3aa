//! Configuration types for AuditLink.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional `.auditlink/config.yaml` file, and environment variables.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;

/// Resolve settings for a project directory: file (or defaults), then
/// environment overrides, then validation.
pub fn resolve(project_dir: impl AsRef<std::path::Path>) -> Result<AuditSettings, ConfigError> {
    let loader = ConfigLoader::new(project_dir);
    let settings = loader.load()?.apply_env()?;
    loader.validate(&settings)?;
    Ok(settings)
}
