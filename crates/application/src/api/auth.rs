//! Authentication and notification endpoints.

use pindrop_domain::{
    ApiRequest, AuthResponse, LoginRequest, Notification, RegisterRequest, Session, User,
};
use serde_json::Value;

use crate::error::ApiResult;
use crate::pipeline::AuthenticatedClient;

/// `/auth` and `/notifications` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a AuthenticatedClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`. Stores the returned session on success.
    ///
    /// A rejected login leaves any existing session untouched.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error, or a session error if the new session
    /// cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post("/auth/login").json(&body)?;
        self.authenticate(request).await
    }

    /// `POST /auth/register`. Stores the returned session on success.
    ///
    /// # Errors
    ///
    /// As [`login`](Self::login).
    pub async fn register(&self, account: &RegisterRequest) -> ApiResult<Session> {
        let request = ApiRequest::post("/auth/register").json(account)?;
        self.authenticate(request).await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn me(&self) -> ApiResult<User> {
        self.client.send_json(ApiRequest::get("/auth/me")).await
    }

    /// `GET /notifications`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn notifications(&self) -> ApiResult<Vec<Notification>> {
        self.client.send_json(ApiRequest::get("/notifications")).await
    }

    /// `PUT /notifications/read`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn mark_notifications_read(&self) -> ApiResult<Value> {
        self.client
            .send_value(ApiRequest::put("/notifications/read"))
            .await
    }

    /// Clears the local session. Returns true if one was present.
    pub fn logout(&self) -> bool {
        self.client.session().logout()
    }

    async fn authenticate(&self, request: ApiRequest) -> ApiResult<Session> {
        let response: AuthResponse = self.client.send_json(request).await?;
        let session = response.into_session();
        self.client
            .session()
            .set_auth(session.user.clone(), session.token.clone())?;
        tracing::info!(user_id = session.user.id, role = %session.role(), "Signed in");
        Ok(session)
    }
}
