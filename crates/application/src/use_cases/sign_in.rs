//! Sign-in use case.

use pindrop_domain::{RegisterRequest, Session};

use crate::api::PindropApi;
use crate::error::ApiResult;

/// How the user signs in.
#[derive(Debug, Clone)]
pub enum SignInInput {
    /// Existing account.
    Login {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },
    /// New account.
    Register(RegisterRequest),
}

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignInOutput {
    /// The stored session.
    pub session: Session,
    /// Route to land on for the session's role.
    pub home_route: &'static str,
}

/// Use case for logging in or registering and landing on the role's home.
pub struct SignIn<'a> {
    api: &'a PindropApi,
}

impl<'a> SignIn<'a> {
    /// Creates a new `SignIn` use case.
    #[must_use]
    pub const fn new(api: &'a PindropApi) -> Self {
        Self { api }
    }

    /// Authenticates and stores the session.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection or a session persistence error.
    pub async fn execute(&self, input: SignInInput) -> ApiResult<SignInOutput> {
        let session = match input {
            SignInInput::Login { email, password } => {
                self.api.auth().login(&email, &password).await?
            }
            SignInInput::Register(account) => self.api.auth().register(&account).await?,
        };
        let home_route = session.role().home_route();
        Ok(SignInOutput {
            session,
            home_route,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::testing::api_as;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_lands_on_role_home() {
        let (transport, api) = api_as(None);
        transport.respond(
            200,
            json!({
                "access_token": "t",
                "user": {"id": 1, "name": "A", "email": "a@x.io", "role": "care", "pin_code": "1"}
            }),
        );

        let output = SignIn::new(&api)
            .execute(SignInInput::Login {
                email: "a@x.io".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.home_route, "/care");
        assert_eq!(api.session().current(), Some(output.session));
    }
}
