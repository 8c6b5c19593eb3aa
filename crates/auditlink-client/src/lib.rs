//! Audit event emission for AuditLink.
//!
//! [`AuditEventClient`] normalizes application actions into the shared audit
//! envelope and posts them to the audit gateway. Emission never fails from
//! the caller's point of view: [`AuditEventClient::log_event`] answers with a
//! boolean, and [`AuditEventClient::deliver`] with a [`DeliveryOutcome`] for
//! callers that need to tell a rejection from an unreachable gateway.
//!
//! ```no_run
//! # async fn demo() -> Result<(), auditlink_common_http::HttpError> {
//! use auditlink_client::AuditEventClient;
//!
//! let audit = AuditEventClient::new("https://audit.internal", "web-portal")?;
//! audit.log_login("u-42", true, Some("203.0.113.7")).await;
//! # Ok(())
//! # }
//! ```

mod client;
mod convenience;
mod delivery;
pub mod events;
mod transport;

#[cfg(test)]
mod testing;

pub use client::{transmission_timestamp, AuditEventClient, ClientConfig, EVENTS_PATH};
pub use delivery::DeliveryOutcome;
pub use transport::{EventTransport, HttpTransport, TransportRequest};

pub use auditlink_types::{
    category, severity, ActorType, AuditEventEnvelope, AuditEventRequest, AuditOutcome, Payload,
    PayloadPolicy,
};
