//! HTTP client utilities for AuditLink.

pub mod client;
pub mod request;

pub use client::{build_client, HttpClient, HttpConfig, HttpError};
pub use request::{headers, RequestBuilder};
