//! The audit event client.

use crate::delivery::DeliveryOutcome;
use crate::transport::{EventTransport, HttpTransport, TransportRequest};
use auditlink_common_config::AuditSettings;
use auditlink_common_http::{HttpConfig, HttpError, RequestBuilder};
use auditlink_types::{AuditEventEnvelope, AuditEventRequest, PayloadPolicy};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Gateway path that receives audit events.
pub const EVENTS_PATH: &str = "/api/v1/audit/events";

/// Static client configuration, fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the audit gateway.
    pub gateway_url: String,
    /// Name reported in every envelope and in the `X-Service-Name` header.
    pub service_name: String,
    /// Payload masking and size limits.
    pub payload_policy: PayloadPolicy,
    /// When false, events are accepted locally and never sent.
    pub enabled: bool,
}

impl ClientConfig {
    /// Configuration with a pass-through payload policy.
    pub fn new(gateway_url: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            service_name: service_name.into(),
            payload_policy: PayloadPolicy::default(),
            enabled: true,
        }
    }
}

impl From<&AuditSettings> for ClientConfig {
    fn from(settings: &AuditSettings) -> Self {
        Self {
            gateway_url: settings.gateway_url.clone(),
            service_name: settings.service_name.clone(),
            payload_policy: PayloadPolicy {
                mask_pii: settings.mask_pii,
                max_bytes: settings.max_payload_bytes,
            },
            enabled: settings.enabled,
        }
    }
}

/// Current time as an ISO-8601 UTC instant with millisecond precision,
/// e.g. `2026-01-02T03:04:05.678Z`.
pub fn transmission_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalizes audit events and sends them to the gateway.
///
/// Cloning is cheap and clones share configuration and connection pool, so a
/// single client can serve any number of concurrent callers.
pub struct AuditEventClient<T = HttpTransport> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T> Clone for AuditEventClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> std::fmt::Debug for AuditEventClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditEventClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AuditEventClient<HttpTransport> {
    /// Create a client for a gateway and service name with default HTTP
    /// settings.
    pub fn new(
        gateway_url: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Result<Self, HttpError> {
        Self::with_http_config(ClientConfig::new(gateway_url, service_name), &HttpConfig::default())
    }

    /// Create a client from resolved settings.
    pub fn from_settings(settings: &AuditSettings) -> Result<Self, HttpError> {
        let http = HttpConfig::default().with_request_timeout(settings.timeout());
        Self::with_http_config(ClientConfig::from(settings), &http)
    }

    /// Create a client with explicit HTTP settings.
    pub fn with_http_config(config: ClientConfig, http: &HttpConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(config, HttpTransport::new(http)?))
    }
}

impl<T: EventTransport> AuditEventClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn service_name(&self) -> &str {
        &self.config.service_name
    }

    pub fn gateway_url(&self) -> &str {
        &self.config.gateway_url
    }

    /// Full URL events are posted to.
    pub fn events_url(&self) -> String {
        RequestBuilder::new()
            .base_url(self.config.gateway_url.as_str())
            .url(EVENTS_PATH)
    }

    /// Turn a request into the envelope that would be sent, applying every
    /// default and the payload policy.
    pub fn build_envelope(&self, request: AuditEventRequest) -> AuditEventEnvelope {
        let mut envelope =
            AuditEventEnvelope::from_request(self.config.service_name.as_str(), request);
        let policy = self.config.payload_policy;
        if !policy.is_passthrough() {
            envelope.payload = policy.apply(std::mem::take(&mut envelope.payload));
        }
        envelope
    }

    /// Emit an event. Returns `true` only if the gateway answered with a 2xx
    /// status, or if emission is disabled; every failure, including an
    /// unreachable gateway, is `false`.
    pub async fn log_event(&self, request: AuditEventRequest) -> bool {
        self.deliver(request).await.is_accepted()
    }

    /// Emit an event and report exactly what happened. Never fails.
    #[tracing::instrument(
        name = "audit_event",
        skip_all,
        fields(event_type = %request.event_type)
    )]
    pub async fn deliver(&self, request: AuditEventRequest) -> DeliveryOutcome {
        if !self.config.enabled {
            debug!("audit emission disabled, event dropped");
            return DeliveryOutcome::Disabled;
        }

        let timestamp = transmission_timestamp();
        let envelope = self.build_envelope(request);

        let body = match serde_json::to_vec(&envelope) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "failed to encode audit event");
                return DeliveryOutcome::TransportError {
                    message: e.to_string(),
                };
            }
        };

        let headers = match RequestBuilder::new()
            .json_content()
            .service_name(self.config.service_name.as_str())
            .and_then(|builder| builder.service_timestamp(&timestamp))
        {
            Ok(builder) => builder.into_headers(),
            Err(e) => {
                error!(error = %e, "failed to build audit event headers");
                return DeliveryOutcome::TransportError {
                    message: e.to_string(),
                };
            }
        };

        let request = TransportRequest {
            url: self.events_url(),
            headers,
            body,
        };

        match self.transport.send(request).await {
            Ok(status) => {
                let outcome = DeliveryOutcome::from_status(status);
                if outcome.is_delivered() {
                    debug!(status, "audit event accepted");
                } else {
                    warn!(status, "audit event rejected by gateway");
                }
                outcome
            }
            Err(e) => {
                error!(error = %e, url = %self.events_url(), "audit event transmission failed");
                DeliveryOutcome::TransportError {
                    message: e.to_string(),
                }
            }
        }
    }
}
