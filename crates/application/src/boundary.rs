//! Top-level handling of expired sessions.

use std::sync::Arc;

use pindrop_domain::LOGIN_PATH;

use crate::error::{ApiError, ApiResult};
use crate::ports::Navigator;

/// Turns [`ApiError::AuthenticationExpired`] into a redirect to the login
/// page.
///
/// The pipeline has already cleared the session by the time this sees the
/// error; the boundary only navigates. Results pass through unchanged so
/// the caller can still drop its own state.
#[derive(Clone)]
pub struct SessionExpiryBoundary {
    navigator: Arc<dyn Navigator>,
}

impl SessionExpiryBoundary {
    /// Creates a boundary that navigates with `navigator`.
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// Redirects to `/login` if `result` is an expired session, then
    /// returns `result` unchanged.
    pub fn handle<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if matches!(result, Err(ApiError::AuthenticationExpired)) {
            self.redirect_to_login();
        }
        result
    }

    /// Redirects to `/login` unless already there. Returns true if a
    /// redirect was issued.
    pub fn redirect_to_login(&self) -> bool {
        self.navigator.redirect_unless_at(LOGIN_PATH)
    }
}

impl std::fmt::Debug for SessionExpiryBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionExpiryBoundary")
            .field("current_path", &self.navigator.current_path())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pipeline::AuthenticatedClient;
    use crate::session::SessionStore;
    use crate::test_support::{MemoryStorage, MockTransport, RecordingNavigator, user};
    use pindrop_domain::{ApiRequest, Role};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Harness {
        transport: Arc<MockTransport>,
        session: Arc<SessionStore>,
        navigator: Arc<RecordingNavigator>,
        client: AuthenticatedClient,
        boundary: SessionExpiryBoundary,
    }

    fn harness(path: &str) -> Harness {
        let transport = Arc::new(MockTransport::default());
        let session = Arc::new(SessionStore::open(Arc::new(MemoryStorage::default())));
        let navigator = Arc::new(RecordingNavigator::at(path));
        Harness {
            client: AuthenticatedClient::new(transport.clone(), session.clone()),
            boundary: SessionExpiryBoundary::new(navigator.clone()),
            transport,
            session,
            navigator,
        }
    }

    #[tokio::test]
    async fn test_expired_owner_session_redirects_once() {
        let h = harness("/owner/orders");
        h.session.set_auth(user(Role::Owner), "valid").unwrap();
        h.transport.respond(401, json!({"detail": "Token expired"}));

        let result = h
            .boundary
            .handle(h.client.send(ApiRequest::get("/owner/orders")).await);

        assert!(matches!(result, Err(ApiError::AuthenticationExpired)));
        assert!(h.session.current().is_none());
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_no_redirect_when_already_on_login() {
        let h = harness("/login");
        h.transport.respond(401, json!({}));

        let result = h.boundary.handle(h.client.send(ApiRequest::get("/auth/me")).await);

        assert!(result.unwrap_err().is_authentication_expired());
        assert!(h.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_does_not_redirect() {
        let h = harness("/login");
        h.transport.respond(401, json!({"detail": "Invalid credentials"}));

        let result = h
            .boundary
            .handle(h.client.send(ApiRequest::post("/auth/login")).await);

        assert_eq!(result.unwrap_err().status(), Some(401));
        assert!(h.session.current().is_none());
        assert!(h.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_parallel_expiries_redirect_once() {
        let h = harness("/customer/cart");
        h.session.set_auth(user(Role::Customer), "valid").unwrap();
        h.transport.respond(401, json!({}));
        h.transport.respond(401, json!({}));

        let (a, b) = tokio::join!(
            h.client.send(ApiRequest::get("/customer/cart")),
            h.client.send(ApiRequest::get("/customer/offers")),
        );
        let _ = h.boundary.handle(a);
        let _ = h.boundary.handle(b);

        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_concurrent_expiries_on_two_threads_redirect_once() {
        let navigator = Arc::new(RecordingNavigator::at("/owner/orders"));
        let boundary = SessionExpiryBoundary::new(navigator.clone());
        let barrier = std::sync::Barrier::new(2);

        std::thread::scope(|scope| {
            for _ in 0..2 {
                scope.spawn(|| {
                    barrier.wait();
                    let result: ApiResult<()> =
                        boundary.handle(Err(ApiError::AuthenticationExpired));
                    assert!(result.is_err());
                });
            }
        });

        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
        assert_eq!(navigator.current_path(), "/login");
    }

    #[test]
    fn test_other_errors_do_not_navigate() {
        let navigator = Arc::new(RecordingNavigator::at("/admin"));
        let boundary = SessionExpiryBoundary::new(navigator.clone());

        let result: ApiResult<()> = boundary.handle(Err(ApiError::RequestFailed {
            status: 500,
            detail: None,
        }));

        assert!(result.is_err());
        assert!(navigator.redirects().is_empty());
    }

    #[test]
    fn test_login_with_query_counts_as_login() {
        let navigator = Arc::new(RecordingNavigator::at("/login?next=%2Fowner"));
        let boundary = SessionExpiryBoundary::new(navigator.clone());
        assert!(!boundary.redirect_to_login());
        assert!(navigator.redirects().is_empty());
    }
}
