//! Login and registration payloads.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::session::{Session, User};

/// Credentials sent to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Account details sent to `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Requested role.
    pub role: Role,
    /// Pin code the account operates in.
    pub pin_code: String,
}

/// Response body of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// The authenticated user.
    pub user: User,
}

impl AuthResponse {
    /// Converts the response into a session.
    #[must_use]
    pub fn into_session(self) -> Session {
        Session::new(self.user, self.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_wire_format() {
        let request = RegisterRequest {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            password: "pw".to_string(),
            role: Role::Delivery,
            pin_code: "400001".to_string(),
        };
        let value = serde_json::to_value(&request).expect("serializes");
        assert_eq!(value["role"], "delivery");
        assert_eq!(value["pin_code"], "400001");
    }

    #[test]
    fn test_auth_response_into_session() {
        let json = r#"{
            "access_token": "tok",
            "user": {"id": 1, "name": "A", "email": "a@b.c", "role": "admin", "pin_code": "1"}
        }"#;
        let response: AuthResponse = serde_json::from_str(json).expect("parses");
        let session = response.into_session();
        assert_eq!(session.token, "tok");
        assert_eq!(session.role(), Role::Admin);
    }
}
