//! Password verification against the backend API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;

#[derive(Debug, Serialize)]
struct VerifyRequest {
    password: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    error: Option<String>,
}

/// Interface to the password-verification service guarding admin pages.
///
/// The real check happens in the backend; callers only learn whether the
/// password was accepted.
#[async_trait]
pub trait AuthGateway {
    async fn verify_password(&self, password: &str) -> Result<(), Error>;
}

/// `AuthGateway` backed by the backend HTTP API.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    api_base_url: String,
}

impl HttpAuthGateway {
    pub fn new(client: reqwest::Client, api_base_url: String) -> Self {
        Self { client, api_base_url }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn verify_password(&self, password: &str) -> Result<(), Error> {
        let verify_url = format!("{}/api/auth/verify", self.api_base_url);
        let request = VerifyRequest {
            password: password.to_string(),
        };

        debug!("Verifying password with backend");

        let response = self.client.post(&verify_url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(Error::AuthFailed("Incorrect password".to_string()));
        }

        let body: VerifyResponse = response.json().await?;
        if !body.success {
            return Err(Error::AuthFailed(
                body.error.unwrap_or_else(|| "Incorrect password".to_string()),
            ));
        }

        Ok(())
    }
}

/// Mock gateway for testing gated flows without a backend.
///
/// Can be configured to accept one password, reject everything, or fail
/// as if the backend were unreachable.
pub struct MockAuthGateway {
    accepted: Option<String>,
    should_fail: bool,
}

impl MockAuthGateway {
    /// Gateway accepting exactly the given password.
    pub fn accepting(password: &str) -> Self {
        Self {
            accepted: Some(password.to_string()),
            should_fail: false,
        }
    }

    /// Gateway rejecting every password.
    pub fn rejecting() -> Self {
        Self {
            accepted: None,
            should_fail: false,
        }
    }

    /// Gateway failing every call, as if the backend were unreachable.
    pub fn with_failure() -> Self {
        Self {
            accepted: None,
            should_fail: true,
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn verify_password(&self, password: &str) -> Result<(), Error> {
        if self.should_fail {
            return Err(Error::ApiError("Mock gateway configured to fail".to_string()));
        }

        match &self.accepted {
            Some(accepted) if accepted == password => Ok(()),
            _ => Err(Error::AuthFailed("Incorrect password".to_string())),
        }
    }
}
