use reqwest::Error;
use serde_json::Value;
use shared::models::{
    CreateUserRequest, CreateUserResponse, InterestsUpdate, LoginRequest, LoginResponse,
    ProfileUpdate,
};

use crate::api::ApiClient;

/// Client-side facade over the `/users` and `/login` endpoints.
///
/// One method per backend operation; each is a single HTTP call that
/// resolves to the parsed response body or propagates the failure as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    /// Build the service around an explicitly constructed client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<CreateUserResponse, Error> {
        let request = CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.client.post("/users", &request).await
    }

    /// Authenticate and receive the user's id, plus a token when the
    /// backend issues one.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, Error> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.client.post("/login", &request).await
    }

    /// Replace the profile fields of the given user. The response schema
    /// is owned by the backend, so the body comes back as plain JSON.
    pub async fn update_profile(
        &self,
        user_id: &str,
        profile: &ProfileUpdate,
    ) -> Result<Value, Error> {
        self.client
            .put(&format!("/users/{user_id}/profile"), profile)
            .await
    }

    /// Replace the interest list of the given user.
    pub async fn update_interests(
        &self,
        user_id: &str,
        interests: &[String],
    ) -> Result<Value, Error> {
        let request = InterestsUpdate {
            interests: interests.to_vec(),
        };
        self.client
            .put(&format!("/users/{user_id}/interests"), &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontendConfig;
    use crate::storage::{MemoryStorage, Session};
    use std::rc::Rc;

    #[test]
    fn service_shares_the_client_session() {
        let session = Session::new(Rc::new(MemoryStorage::default()));
        let config = FrontendConfig {
            api_base_url: "http://localhost:3003".to_string(),
        };
        let service = UserService::new(ApiClient::new(&config, session.clone()));

        let clone = service.clone();
        assert_eq!(service, clone);
    }

    #[test]
    fn update_endpoints_embed_the_user_id() {
        let user_id = "42";
        assert_eq!(format!("/users/{user_id}/profile"), "/users/42/profile");
        assert_eq!(format!("/users/{user_id}/interests"), "/users/42/interests");
    }
}
