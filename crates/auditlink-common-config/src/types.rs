//! Configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gateway URL used when none is configured.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8000";
/// Service name used when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "unknown-service";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Settings for an audit client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    /// Base URL of the audit ingestion gateway.
    pub gateway_url: String,
    /// Name this application reports itself as.
    pub service_name: String,
    /// Send events at all. When false, events are accepted and dropped.
    pub enabled: bool,
    /// Per-request timeout in seconds.
    pub timeout_secs: f64,
    /// Mask PII-looking payload values before sending.
    pub mask_pii: bool,
    /// Replace payloads larger than this many bytes with a truncation marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_payload_bytes: Option<usize>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            enabled: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mask_pii: false,
            max_payload_bytes: None,
        }
    }
}

impl AuditSettings {
    /// Settings for a gateway and service, everything else defaulted.
    pub fn new(gateway_url: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            service_name: service_name.into(),
            ..Self::default()
        }
    }

    /// Request timeout as a duration. Non-positive or non-finite values fall
    /// back to the default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs.is_finite() && self.timeout_secs > 0.0 {
            Duration::from_secs_f64(self.timeout_secs)
        } else {
            Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS)
        }
    }
}
