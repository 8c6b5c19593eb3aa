//! Request header assembly.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::HttpError;

/// Header names and values used when talking to the audit gateway.
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
    pub const X_SERVICE_NAME: &str = "x-service-name";
    pub const X_SERVICE_TIMESTAMP: &str = "x-service-timestamp";
}

/// Builds the headers and URL of a gateway request.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    headers: HeaderMap,
    base_url: Option<String>,
}

impl RequestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a header. Fails if the name or value is not valid HTTP.
    pub fn header(mut self, name: &str, value: impl AsRef<str>) -> Result<Self, HttpError> {
        let invalid = || HttpError::InvalidHeader {
            name: name.to_string(),
        };
        let header_name = HeaderName::try_from(name).map_err(|_| invalid())?;
        let header_value = HeaderValue::try_from(value.as_ref()).map_err(|_| invalid())?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set content type to JSON.
    pub fn json_content(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(headers::CONTENT_TYPE_JSON));
        self
    }

    /// Identify the calling service.
    pub fn service_name(self, name: impl AsRef<str>) -> Result<Self, HttpError> {
        self.header(headers::X_SERVICE_NAME, name)
    }

    /// Stamp the time the request was produced.
    pub fn service_timestamp(self, timestamp: impl AsRef<str>) -> Result<Self, HttpError> {
        self.header(headers::X_SERVICE_TIMESTAMP, timestamp)
    }

    /// Get the built headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Consume the builder, returning the headers.
    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }

    /// Join the base URL and a path.
    pub fn url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path.to_string(),
        }
    }
}
