//! The canonical audit event sent to the gateway.

use crate::{
    category, severity, ActorType, AuditEventRequest, AuditOutcome, Payload, ANONYMOUS_ACTOR,
};
use serde::{Deserialize, Serialize};

/// A fully populated audit event.
///
/// Field order matches the gateway's JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEventEnvelope {
    /// Name of the emitting service.
    pub service: String,
    pub event_type: String,
    pub event_category: String,
    pub severity: String,
    pub action: String,
    pub actor_id: String,
    pub actor_type: ActorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub outcome: AuditOutcome,
    #[serde(default)]
    pub payload: Payload,
}

impl AuditEventEnvelope {
    /// Normalize a request, applying every default.
    pub fn from_request(service: impl Into<String>, request: AuditEventRequest) -> Self {
        let actor_type = ActorType::for_actor(request.actor_id.as_deref());

        Self {
            service: service.into(),
            event_type: request.event_type,
            event_category: request
                .category
                .unwrap_or_else(|| category::DEFAULT.to_string()),
            severity: request
                .severity
                .unwrap_or_else(|| severity::DEFAULT.to_string()),
            action: request.action,
            actor_id: request
                .actor_id
                .unwrap_or_else(|| ANONYMOUS_ACTOR.to_string()),
            actor_type,
            resource_type: request.resource_type,
            resource_id: request.resource_id,
            outcome: request.outcome.unwrap_or_default(),
            payload: request.payload.unwrap_or_default(),
        }
    }
}
