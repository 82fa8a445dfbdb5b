//! Authenticated identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// User record returned by the server on login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Marketplace role.
    pub role: Role,
    /// Pin code the user operates in.
    pub pin_code: String,
}

/// The current authenticated identity.
///
/// A session always carries both a user and a token; the unauthenticated
/// state is the absence of a session (`Option<Session>::None`), so a
/// half-authenticated value cannot be built.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// The logged-in user.
    pub user: User,
    /// Opaque bearer token issued by the server.
    pub token: String,
}

impl Session {
    /// Creates a session from a user and a token.
    #[must_use]
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    /// Returns the role of the session's user.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
