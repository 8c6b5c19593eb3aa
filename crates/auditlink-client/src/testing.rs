//! In-process transports for unit tests.

use crate::transport::{EventTransport, TransportRequest};
use async_trait::async_trait;
use auditlink_common_http::HttpError;
use std::sync::Mutex;

/// Records every request and answers with a fixed status.
pub struct RecordingTransport {
    status: u16,
    sent: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn take(&self) -> Vec<TransportRequest> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl EventTransport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<u16, HttpError> {
        self.sent.lock().unwrap().push(request);
        Ok(self.status)
    }
}

/// Fails every request as if the gateway timed out.
pub struct FailingTransport;

#[async_trait]
impl EventTransport for FailingTransport {
    async fn send(&self, _request: TransportRequest) -> Result<u16, HttpError> {
        Err(HttpError::Timeout)
    }
}
