//! Audit event types for AuditLink.
//!
//! A caller describes what happened with an [`AuditEventRequest`], leaving
//! most fields unset. [`AuditEventEnvelope::from_request`] fills in every
//! default and derives the actor type, producing the canonical body that is
//! sent to the audit gateway.

mod actor;
pub mod category;
mod envelope;
mod outcome;
mod request;
mod sanitize;
pub mod severity;

pub use actor::{ActorType, ANONYMOUS_ACTOR};
pub use envelope::AuditEventEnvelope;
pub use outcome::AuditOutcome;
pub use request::{AuditEventRequest, Payload};
pub use sanitize::{looks_like_pii, mask_value, PayloadPolicy};
