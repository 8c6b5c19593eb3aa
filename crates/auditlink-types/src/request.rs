//! Caller-supplied audit event requests.

use crate::AuditOutcome;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Free-form structured detail attached to an event.
pub type Payload = HashMap<String, serde_json::Value>;

/// A partially specified audit event.
///
/// Only `event_type` and `action` are required. Everything else is filled
/// in when the request is turned into an
/// [`AuditEventEnvelope`](crate::AuditEventEnvelope).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditEventRequest {
    /// Dot-namespaced identifier, e.g. `auth.login`.
    pub event_type: String,
    /// Short verb or phrase describing what happened.
    pub action: String,
    /// Subject performing the action.
    #[serde(default)]
    pub actor_id: Option<String>,
    /// Type of the object acted upon.
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Identifier of the object acted upon.
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub outcome: Option<AuditOutcome>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub payload: Option<Payload>,
}

impl AuditEventRequest {
    /// Create a request with only the required fields set.
    pub fn new(event_type: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            action: action.into(),
            ..Self::default()
        }
    }

    /// Set the actor.
    pub fn actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    /// Set the actor if one is known.
    pub fn maybe_actor(mut self, actor_id: Option<&str>) -> Self {
        self.actor_id = actor_id.map(str::to_owned);
        self
    }

    /// Set the resource acted upon.
    pub fn resource(
        mut self,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        self.resource_type = Some(resource_type.into());
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Set the outcome.
    pub fn outcome(mut self, outcome: AuditOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the severity.
    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    /// Replace the payload.
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Add a single payload entry.
    ///
    /// Values that fail to serialize are dropped.
    pub fn payload_entry(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(json) = serde_json::to_value(value) {
            self.payload
                .get_or_insert_with(Payload::new)
                .insert(key.into(), json);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_leaves_optionals_empty() {
        let request = AuditEventRequest::new("auth.login", "login");
        assert_eq!(request.event_type, "auth.login");
        assert_eq!(request.action, "login");
        assert!(request.actor_id.is_none());
        assert!(request.resource_type.is_none());
        assert!(request.resource_id.is_none());
        assert!(request.outcome.is_none());
        assert!(request.category.is_none());
        assert!(request.severity.is_none());
        assert!(request.payload.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let request = AuditEventRequest::new("doc.edit", "edit")
            .actor("u1")
            .resource("document", "d-9")
            .outcome(AuditOutcome::Blocked)
            .category("data")
            .severity("warning")
            .payload_entry("revision", 4);

        assert_eq!(request.actor_id.as_deref(), Some("u1"));
        assert_eq!(request.resource_type.as_deref(), Some("document"));
        assert_eq!(request.resource_id.as_deref(), Some("d-9"));
        assert_eq!(request.outcome, Some(AuditOutcome::Blocked));
        assert_eq!(request.category.as_deref(), Some("data"));
        assert_eq!(request.severity.as_deref(), Some("warning"));
        assert_eq!(request.payload.unwrap()["revision"], json!(4));
    }

    #[test]
    fn test_maybe_actor() {
        let request = AuditEventRequest::new("page.view", "view").maybe_actor(None);
        assert!(request.actor_id.is_none());

        let request = AuditEventRequest::new("page.view", "view").maybe_actor(Some("u2"));
        assert_eq!(request.actor_id.as_deref(), Some("u2"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let request: AuditEventRequest =
            serde_json::from_str(r#"{"event_type":"x.y","action":"z"}"#).unwrap();
        assert_eq!(request, AuditEventRequest::new("x.y", "z"));
    }
}
