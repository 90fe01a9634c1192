use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Error, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::FrontendConfig;
use crate::storage::Session;

/// Header carrying the stored user identifier back to the backend.
pub const USER_TOKEN_HEADER: &str = "user-token";

/// Lightweight API client for Amora web interactions.
///
/// Constructed once at startup and handed to the service layer; there is
/// no global client state. The session is read when each request is built,
/// so a login that happens after construction is picked up by the next
/// request. Failures are logged here and returned to the caller unchanged;
/// this layer adds no retries, timeouts or error translation.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    session: Session,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl ApiClient {
    /// Create a new API client for the configured backend, reading auth
    /// state from the given session.
    pub fn new(config: &FrontendConfig, session: Session) -> Self {
        Self {
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    /// Base URL every request is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request with the default JSON headers, attaching the stored
    /// user identifier when one is present.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.api_url(path);
        log::info!("request {method} {url}");

        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(user_id) = self.session.user_id() {
            builder = builder.header(USER_TOKEN_HEADER, user_id);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.log_send_failure(&err);
                return Err(err);
            }
        };

        let status = response.status();
        let url = response.url().clone();
        // Take the status check as an owned result so the response stays
        // consumable for the body log below.
        let checked = response.error_for_status_ref().map(|_| ());
        match checked {
            Ok(()) => {
                log::info!("response {url} {status}");
                response.json().await
            }
            Err(err) => {
                let body = response.text().await.unwrap_or_default();
                log::error!("server error {status} at {url}: {body}");
                Err(err)
            }
        }
    }

    /// Distinguish a request that never left the client from one the
    /// network swallowed, and record where it was headed.
    fn log_send_failure(&self, err: &Error) {
        if err.is_builder() {
            log::error!("failed to build request: {err}");
        } else {
            log::error!("no response from server: {err}");
            if let Some(url) = err.url() {
                log::error!("attempted url: {url}");
            }
            log::error!("configured base url: {}", self.base_url);
        }
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// PUT a JSON body to `path` and decode the JSON response.
    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use shared::models::LoginRequest;
    use std::rc::Rc;

    fn memory_session() -> Session {
        Session::new(Rc::new(MemoryStorage::default()))
    }

    fn test_client(session: &Session) -> ApiClient {
        let config = FrontendConfig {
            api_base_url: "http://localhost:3003".to_string(),
        };
        ApiClient::new(&config, session.clone())
    }

    #[test]
    fn attaches_user_token_when_a_user_is_stored() {
        let session = memory_session();
        session.set_user_id("42");
        let client = test_client(&session);

        let request = client.request(Method::POST, "/login").build().unwrap();

        assert_eq!(request.headers().get(USER_TOKEN_HEADER).unwrap(), "42");
    }

    #[test]
    fn omits_user_token_when_no_user_is_stored() {
        let session = memory_session();
        let client = test_client(&session);

        let request = client.request(Method::POST, "/login").build().unwrap();

        assert!(request.headers().get(USER_TOKEN_HEADER).is_none());
    }

    #[test]
    fn reads_the_session_at_dispatch_time() {
        let session = memory_session();
        let client = test_client(&session);

        let before = client.request(Method::GET, "/users").build().unwrap();
        assert!(before.headers().get(USER_TOKEN_HEADER).is_none());

        session.set_user_id("7");
        let after = client.request(Method::GET, "/users").build().unwrap();
        assert_eq!(after.headers().get(USER_TOKEN_HEADER).unwrap(), "7");
    }

    #[test]
    fn sets_default_json_headers() {
        let session = memory_session();
        let client = test_client(&session);

        let request = client.request(Method::POST, "/users").build().unwrap();

        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(request.headers().get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn joins_base_url_and_path() {
        let session = memory_session();
        let client = test_client(&session);

        let request = client.request(Method::POST, "/login").build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:3003/login");

        let bare = client.request(Method::POST, "login").build().unwrap();
        assert_eq!(bare.url().as_str(), "http://localhost:3003/login");
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let session = memory_session();
        let config = FrontendConfig {
            api_base_url: "http://localhost:3003/".to_string(),
        };
        let client = ApiClient::new(&config, session);

        assert_eq!(client.base_url(), "http://localhost:3003");
        let request = client.request(Method::PUT, "/users/42/profile").build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:3003/users/42/profile"
        );
    }

    #[test]
    fn serializes_the_json_body_verbatim() {
        let session = memory_session();
        let client = test_client(&session);
        let payload = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };

        let request = client
            .request(Method::POST, "/login")
            .json(&payload)
            .build()
            .unwrap();

        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, br#"{"username":"alice","password":"secret"}"#.as_slice());
    }

    #[test]
    fn clients_over_the_same_session_compare_equal() {
        let session = memory_session();
        let first = test_client(&session);
        let second = test_client(&session);
        assert_eq!(first, second);

        let other = test_client(&memory_session());
        assert_ne!(first, other);
    }
}
