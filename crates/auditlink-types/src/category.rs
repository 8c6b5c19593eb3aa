//! Well-known audit event categories.
//!
//! Categories are free-form on the wire; these are the names shared across
//! applications.

/// Authentication events (login, logout, MFA).
pub const AUTH: &str = "auth";
/// Data access and mutation.
pub const DATA: &str = "data";
/// Administrative changes.
pub const ADMIN: &str = "admin";
/// Security-relevant events, including client-side errors.
pub const SECURITY: &str = "security";
/// Compliance and consent events.
pub const COMPLIANCE: &str = "compliance";
/// Billing and payments.
pub const BILLING: &str = "billing";
/// Outbound and inbound messaging.
pub const MESSAGING: &str = "messaging";
/// Product analytics.
pub const ANALYTICS: &str = "analytics";
/// Everything else.
pub const GENERAL: &str = "general";

/// Category applied when a request does not set one.
pub const DEFAULT: &str = GENERAL;
