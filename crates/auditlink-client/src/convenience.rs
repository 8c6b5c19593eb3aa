//! Shorthand emitters for common action classes.

use crate::events;
use crate::transport::EventTransport;
use crate::AuditEventClient;
use auditlink_types::Payload;
use std::fmt;
use std::future::Future;

impl<T: EventTransport> AuditEventClient<T> {
    /// Record a page view.
    pub async fn log_page_view(&self, page: &str, user_id: Option<&str>) -> bool {
        self.log_event(events::page_view(page, user_id)).await
    }

    /// Record an application-specific user action as `user.<action>`.
    pub async fn log_user_action(
        &self,
        action: &str,
        user_id: &str,
        details: Option<Payload>,
    ) -> bool {
        self.log_event(events::user_action(action, user_id, details)).await
    }

    /// Record a login attempt.
    pub async fn log_login(&self, user_id: &str, success: bool, ip: Option<&str>) -> bool {
        self.log_event(events::login(user_id, success, ip)).await
    }

    /// Record an API call and its status code.
    pub async fn log_api_call(
        &self,
        endpoint: &str,
        method: &str,
        status_code: u16,
        user_id: Option<&str>,
    ) -> bool {
        self.log_event(events::api_call(endpoint, method, status_code, user_id))
            .await
    }

    /// Record a client-side error.
    ///
    /// The error is rendered before the returned future is created, so it
    /// need not be `Send`.
    pub fn log_error(
        &self,
        error: impl fmt::Display,
        context: Option<Payload>,
    ) -> impl Future<Output = bool> + Send + '_ {
        let request = events::client_error(error, context);
        self.log_event(request)
    }
}
