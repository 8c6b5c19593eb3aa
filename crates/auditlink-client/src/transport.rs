//! The seam between the client and the network.

use async_trait::async_trait;
use auditlink_common_http::{HttpClient, HttpConfig, HttpError};
use reqwest::header::HeaderMap;

/// A fully prepared gateway request.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub headers: HeaderMap,
    /// Encoded JSON envelope.
    pub body: Vec<u8>,
}

/// Sends prepared requests and reports the response status.
///
/// Implementations must not retry; each call is a single attempt.
#[async_trait]
pub trait EventTransport: Send + Sync {
    /// Send the request, returning the HTTP status code of the response.
    async fn send(&self, request: TransportRequest) -> Result<u16, HttpError>;
}

/// Transport over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Build a transport with the given HTTP settings.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
        })
    }
}

#[async_trait]
impl EventTransport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<u16, HttpError> {
        // The response body is never consulted.
        let response = self
            .http
            .post_bytes(&request.url, request.headers, request.body)
            .await?;
        Ok(response.status().as_u16())
    }
}
