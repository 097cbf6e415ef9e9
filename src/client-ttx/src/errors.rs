#[derive(Debug)]
pub enum Error {
    /// Backend rejected the password or reported a failed verification
    AuthFailed(String),
    /// Backend responded outside its documented shape
    ApiError(String),
    HttpError(reqwest::Error),
    /// A required configuration value is absent
    MissingConfig(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthFailed(message) => write!(f, "Authentication failed: {}", message),
            Self::ApiError(message) => write!(f, "Unexpected API response: {}", message),
            Self::HttpError(e) => write!(f, "HTTP error: {}", e),
            Self::MissingConfig(name) => write!(f, "Missing configuration: {}", name),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::AuthFailed("Incorrect password".to_string());
        assert_eq!(error.to_string(), "Authentication failed: Incorrect password");

        let error = Error::ApiError("missing field".to_string());
        assert_eq!(error.to_string(), "Unexpected API response: missing field");

        let error = Error::MissingConfig("TTX_ADMIN_PASSWORD".to_string());
        assert_eq!(error.to_string(), "Missing configuration: TTX_ADMIN_PASSWORD");
    }
}
