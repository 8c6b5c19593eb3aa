//! Requests for common action classes.
//!
//! Each function is a pure mapping from a narrow argument list to an
//! [`AuditEventRequest`]; the matching `log_*` methods on
//! [`AuditEventClient`](crate::AuditEventClient) send the result.

use auditlink_types::{category, severity, AuditEventRequest, AuditOutcome, Payload};
use serde_json::Value;
use std::fmt;

pub const PAGE_VIEW: &str = "page.view";
pub const AUTH_LOGIN: &str = "auth.login";
pub const API_CALL: &str = "api.call";
pub const CLIENT_ERROR: &str = "error.client";

/// A page was viewed.
pub fn page_view(page: &str, user_id: Option<&str>) -> AuditEventRequest {
    AuditEventRequest::new(PAGE_VIEW, "view")
        .maybe_actor(user_id)
        .resource("page", page)
        .category(category::GENERAL)
}

/// A user did something application specific; recorded as `user.<action>`.
pub fn user_action(action: &str, user_id: &str, details: Option<Payload>) -> AuditEventRequest {
    let mut request = AuditEventRequest::new(format!("user.{action}"), action)
        .actor(user_id)
        .category(category::GENERAL);
    request.payload = details;
    request
}

/// A login attempt. Failed attempts are raised to warning severity.
///
/// The payload carries `ip` only when it is known.
pub fn login(user_id: &str, success: bool, ip: Option<&str>) -> AuditEventRequest {
    let mut payload = Payload::new();
    if let Some(ip) = ip {
        payload.insert("ip".to_string(), Value::from(ip));
    }

    AuditEventRequest::new(AUTH_LOGIN, "login")
        .actor(user_id)
        .category(category::AUTH)
        .outcome(AuditOutcome::from_success(success))
        .severity(if success { severity::INFO } else { severity::WARNING })
        .payload(payload)
}

/// An outbound API call, classified as failed from status 400 upward.
pub fn api_call(
    endpoint: &str,
    method: &str,
    status_code: u16,
    user_id: Option<&str>,
) -> AuditEventRequest {
    AuditEventRequest::new(API_CALL, format!("{method} {endpoint}"))
        .maybe_actor(user_id)
        .resource("api", endpoint)
        .outcome(AuditOutcome::from_status_code(status_code))
        .payload_entry("status_code", status_code)
}

/// A client-side error. Context entries are merged after `error`, so a
/// context key named `error` replaces the message.
pub fn client_error(error: impl fmt::Display, context: Option<Payload>) -> AuditEventRequest {
    let mut payload = Payload::new();
    payload.insert("error".to_string(), Value::String(error.to_string()));
    payload.extend(context.unwrap_or_default());

    AuditEventRequest::new(CLIENT_ERROR, "error")
        .category(category::SECURITY)
        .outcome(AuditOutcome::Failure)
        .severity(severity::ERROR)
        .payload(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditlink_types::{ActorType, AuditEventEnvelope};
    use serde_json::json;

    fn envelope(request: AuditEventRequest) -> AuditEventEnvelope {
        AuditEventEnvelope::from_request("web", request)
    }

    #[test]
    fn test_page_view() {
        let e = envelope(page_view("/settings", None));
        assert_eq!(e.event_type, "page.view");
        assert_eq!(e.action, "view");
        assert_eq!(e.event_category, "general");
        assert_eq!(e.severity, "info");
        assert_eq!(e.outcome, AuditOutcome::Success);
        assert_eq!(e.resource_type.as_deref(), Some("page"));
        assert_eq!(e.resource_id.as_deref(), Some("/settings"));
        assert_eq!(e.actor_id, "anonymous");
        assert_eq!(e.actor_type, ActorType::System);
        assert!(e.payload.is_empty());

        let e = envelope(page_view("/settings", Some("u1")));
        assert_eq!(e.actor_id, "u1");
        assert_eq!(e.actor_type, ActorType::User);
    }

    #[test]
    fn test_user_action() {
        let details: Payload = serde_json::from_value(json!({"plan": "pro"})).unwrap();
        let e = envelope(user_action("upgrade", "u7", Some(details)));
        assert_eq!(e.event_type, "user.upgrade");
        assert_eq!(e.action, "upgrade");
        assert_eq!(e.event_category, "general");
        assert_eq!(e.actor_id, "u7");
        assert_eq!(e.actor_type, ActorType::User);
        assert_eq!(e.payload["plan"], "pro");

        let e = envelope(user_action("logout", "u7", None));
        assert!(e.payload.is_empty());
    }

    #[test]
    fn test_successful_login() {
        let e = envelope(login("u1", true, Some("10.0.0.1")));
        assert_eq!(e.event_type, "auth.login");
        assert_eq!(e.outcome, AuditOutcome::Success);
        assert_eq!(e.severity, "info");
        assert_eq!(e.event_category, "auth");
        assert_eq!(e.actor_id, "u1");
        assert_eq!(serde_json::to_value(&e.payload).unwrap(), json!({"ip": "10.0.0.1"}));
    }

    #[test]
    fn test_failed_login_without_ip() {
        let e = envelope(login("u1", false, None));
        assert_eq!(e.outcome, AuditOutcome::Failure);
        assert_eq!(e.severity, "warning");
        assert_eq!(e.event_category, "auth");
        assert!(e.payload.get("ip").is_none());
    }

    #[test]
    fn test_failed_api_call() {
        let e = envelope(api_call("/foo", "GET", 404, Some("u2")));
        assert_eq!(e.event_type, "api.call");
        assert_eq!(e.outcome, AuditOutcome::Failure);
        assert_eq!(e.resource_type.as_deref(), Some("api"));
        assert_eq!(e.resource_id.as_deref(), Some("/foo"));
        assert_eq!(e.action, "GET /foo");
        assert_eq!(e.actor_id, "u2");
        assert_eq!(e.event_category, "general");
        assert_eq!(serde_json::to_value(&e.payload).unwrap(), json!({"status_code": 404}));
    }

    #[test]
    fn test_successful_api_call() {
        let e = envelope(api_call("/foo", "GET", 200, None));
        assert_eq!(e.outcome, AuditOutcome::Success);
        assert_eq!(e.actor_type, ActorType::System);
    }

    #[test]
    fn test_client_error() {
        let context: Payload = serde_json::from_value(json!({"page": "/checkout"})).unwrap();
        let e = envelope(client_error("boom", Some(context)));
        assert_eq!(e.event_type, "error.client");
        assert_eq!(e.event_category, "security");
        assert_eq!(e.severity, "error");
        assert_eq!(e.outcome, AuditOutcome::Failure);
        assert_eq!(
            serde_json::to_value(&e.payload).unwrap(),
            json!({"error": "boom", "page": "/checkout"})
        );
    }

    #[test]
    fn test_client_error_context_overrides_message() {
        let context: Payload = serde_json::from_value(json!({"error": "detailed"})).unwrap();
        let e = envelope(client_error("boom", Some(context)));
        assert_eq!(e.payload["error"], "detailed");
    }

    #[test]
    fn test_client_error_from_std_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e = envelope(client_error(&err, None));
        assert_eq!(e.payload["error"], "disk full");
    }
}
