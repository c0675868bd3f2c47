//! # Uniform error type for every backend call
//!
//! Each view matches on [`ApiError`] instead of inspecting status codes itself.
//! The variants follow the failure classes the UI distinguishes:
//!
//! | Variant | Raised when | UI reaction |
//! |---------|-------------|-------------|
//! | [`Validation`](ApiError::Validation) | A presence or format check fails before sending | Inline message, nothing sent |
//! | [`SignedOut`](ApiError::SignedOut) | No session user where one is required | Redirect to login |
//! | [`Unauthorized`](ApiError::Unauthorized) | Backend answered 401 | Session cleared, redirect to login |
//! | [`Forbidden`](ApiError::Forbidden) | Backend answered 403 | Inline message |
//! | [`NotFound`](ApiError::NotFound) | Backend answered 404 | Inline message |
//! | [`Server`](ApiError::Server) | Any other non-2xx status | Backend message or fallback |
//! | [`Network`](ApiError::Network) / [`Decode`](ApiError::Decode) | Transport failure, unexpected body | Fallback message |

use store::DraftError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("You are not signed in.")]
    SignedOut,
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Permission denied")]
    Forbidden(Option<String>),
    #[error("Not found")]
    NotFound(Option<String>),
    #[error("Server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text to show inline: the validation or backend message when there is one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::SignedOut | Self::Unauthorized => self.to_string(),
            Self::Forbidden(message) | Self::NotFound(message) => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            Self::Server { message, .. } => message.clone().unwrap_or_else(|| fallback.to_string()),
            Self::Network(_) | Self::Decode(_) => fallback.to_string(),
        }
    }

    /// Whether the caller should be sent back to the login view.
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Self::SignedOut | Self::Unauthorized)
    }

    /// Map a non-2xx status and the backend's optional `message`.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Server { status, message },
        }
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::MissingUser => Self::SignedOut,
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, Some("no".into())),
            ApiError::Forbidden(Some("no".into()))
        );
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound(None));
        assert_eq!(
            ApiError::from_status(500, None),
            ApiError::Server {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ApiError::from_status(409, Some("Duplicate project name".into()));
        assert_eq!(err.user_message("Failed"), "Duplicate project name");
        assert_eq!(ApiError::Network("offline".into()).user_message("Failed"), "Failed");
        assert_eq!(ApiError::NotFound(None).user_message("Missing"), "Missing");
        assert_eq!(ApiError::validation("Name is required").user_message("x"), "Name is required");
    }

    #[test]
    fn test_draft_errors() {
        assert_eq!(ApiError::from(DraftError::MissingUser), ApiError::SignedOut);
        assert!(ApiError::from(DraftError::MissingUser).requires_sign_in());
        assert_eq!(
            ApiError::from(DraftError::MissingProjectId),
            ApiError::Validation("A project ID is required.".into())
        );
        assert!(!ApiError::Forbidden(None).requires_sign_in());
    }
}
