//! Authenticated request pipeline.
//!
//! Every API call goes through [`AuthenticatedClient::send`], which attaches
//! the bearer token on the way out and applies the session-expiry policy on
//! the way back. The pipeline never navigates and never retries: an expired
//! session is reported as [`ApiError::AuthenticationExpired`] after the
//! session store has been cleared.

use std::sync::Arc;

use pindrop_domain::request::AUTHORIZATION_HEADER;
use pindrop_domain::{ApiRequest, ApiResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::ports::HttpTransport;
use crate::session::SessionStore;

/// HTTP client decorator that enforces credential attachment and session
/// expiry on every call.
#[derive(Clone)]
pub struct AuthenticatedClient {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionStore>,
}

impl AuthenticatedClient {
    /// Creates a pipeline over `transport` that reads credentials from
    /// `session`.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<SessionStore>) -> Self {
        Self { transport, session }
    }

    /// The session store this pipeline reads from and clears.
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Sets the `Authorization` header from the current session, if any.
    /// Without a session the request is left untouched.
    pub fn authorize(&self, request: &mut ApiRequest) {
        if let Some(session) = self.session.current() {
            request.set_header(AUTHORIZATION_HEADER, session.authorization_value());
        }
    }

    /// Sends `request` and returns the raw response of a 2xx call.
    ///
    /// # Errors
    ///
    /// - [`ApiError::AuthenticationExpired`] for a 401 on any call other than
    ///   a login attempt; the session store is cleared first
    /// - [`ApiError::RequestFailed`] for any other non-2xx status
    /// - [`ApiError::NetworkUnavailable`] if no response was received
    pub async fn send(&self, mut request: ApiRequest) -> ApiResult<ApiResponse> {
        self.authorize(&mut request);
        tracing::debug!(method = %request.method, path = %request.path, "Sending request");

        let response = self.transport.execute(&request).await?;
        tracing::debug!(
            status = response.status,
            duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
            "Received response"
        );
        self.intercept(&request, response)
    }

    /// Sends `request` and decodes the 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// As [`send`](Self::send), plus [`ApiError::Decode`] if the body does
    /// not match `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let response = self.send(request).await?;
        response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends `request` and returns the 2xx body as untyped JSON.
    ///
    /// # Errors
    ///
    /// As [`send_json`](Self::send_json).
    pub async fn send_value(&self, request: ApiRequest) -> ApiResult<Value> {
        let response = self.send(request).await?;
        response
            .json_value()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn intercept(&self, request: &ApiRequest, response: ApiResponse) -> ApiResult<ApiResponse> {
        if response.is_success() {
            return Ok(response);
        }

        if response.is_unauthorized() && !request.is_login_attempt() {
            if self.session.logout() {
                tracing::warn!(path = %request.path, "Session expired. Logging out...");
            }
            return Err(ApiError::AuthenticationExpired);
        }

        Err(ApiError::RequestFailed {
            status: response.status,
            detail: response.detail(),
        })
    }
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
