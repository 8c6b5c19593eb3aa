//! Well-known audit event severities.

pub const DEBUG: &str = "debug";
pub const INFO: &str = "info";
pub const WARNING: &str = "warning";
pub const ERROR: &str = "error";
pub const CRITICAL: &str = "critical";

/// Severity applied when a request does not set one.
pub const DEFAULT: &str = INFO;
