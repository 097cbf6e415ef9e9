//! Environment-driven client configuration.

use crate::errors::Error;

/// Default backend address when TTX_API_BASE_URL is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Admin password for programmatic authentication, when configured
    pub admin_password: Option<String>,
}

impl ClientConfig {
    /// Reads configuration from the environment, loading a `.env` file
    /// first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url =
            std::env::var("TTX_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let admin_password = std::env::var("TTX_ADMIN_PASSWORD")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Self {
            api_base_url,
            admin_password,
        }
    }

    /// Admin password, required for gated flows.
    ///
    /// # Errors
    ///
    /// Returns an error naming the missing variable when no password is
    /// configured.
    pub fn require_admin_password(&self) -> Result<&str, Error> {
        self.admin_password
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("TTX_ADMIN_PASSWORD".to_string()))
    }
}
