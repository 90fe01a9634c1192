use serde::{Deserialize, Serialize};

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// The user's login name (the signup flow passes the email here).
    pub username: String,

    /// The user's password, forwarded verbatim to the backend.
    pub password: String,
}

/// Response returned when an account was created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserResponse {
    /// Identifier the backend assigned to the new user.
    pub id: String,
}

/// Request to authenticate an existing user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's login name.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Response returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Identifier of the authenticated user. The client stores it in the
    /// tab session and sends it back as the `user-token` header.
    pub id: String,

    /// Bearer token, when the backend issues one alongside the id.
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_wire_format() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(serialized, r#"{"username":"alice","password":"secret"}"#);
    }

    #[test]
    fn login_response_deserializes_exactly() {
        let body = r#"{"id":"42","token":"abc"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            response,
            LoginResponse {
                id: "42".to_string(),
                token: Some("abc".to_string()),
            }
        );
    }

    #[test]
    fn login_response_token_is_optional() {
        let response: LoginResponse = serde_json::from_str(r#"{"id":"42"}"#).unwrap();

        assert_eq!(response.id, "42");
        assert_eq!(response.token, None);
    }

    #[test]
    fn create_user_request_wire_format() {
        let request = CreateUserRequest {
            username: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(
            serialized,
            r#"{"username":"alice@example.com","password":"secret"}"#
        );
    }

    #[test]
    fn create_user_response_ignores_extra_fields() {
        let body = r#"{"id":"7","username":"alice@example.com"}"#;
        let response: CreateUserResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.id, "7");
    }

    #[test]
    fn login_request_roundtrip() {
        let request = LoginRequest {
            username: "bob".to_string(),
            password: "hunter2".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        let deserialized: LoginRequest = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, request);
    }
}
