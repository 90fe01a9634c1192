//! Frontend configuration module
//!
//! This module resolves the base URL of the REST backend the client talks to.

/// Frontend configuration for the backend endpoint
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the REST backend
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("AMORA_API_URL")
                .unwrap_or("http://localhost:3003")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
