//! Suggestion client error types.

use std::fmt;

/// Errors from the timing-suggestion HTTP client.
///
/// None of these are fatal to a build: every failure path degrades to
/// the deterministic timing rules.
#[derive(Debug)]
pub enum SuggestError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Service returned an error status code
    ApiError { status: u16, message: String },

    /// Service returned an empty body
    EmptyResponse,

    /// No suggestion service is configured
    NotConfigured,
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestError::Http(e) => write!(f, "HTTP error: {e}"),
            SuggestError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            SuggestError::EmptyResponse => write!(f, "empty response from suggestion service"),
            SuggestError::NotConfigured => write!(f, "no suggestion service configured"),
        }
    }
}

impl std::error::Error for SuggestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuggestError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        SuggestError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SuggestError::EmptyResponse;
        assert_eq!(err.to_string(), "empty response from suggestion service");

        let err = SuggestError::ApiError {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: slow down");

        let err = SuggestError::NotConfigured;
        assert_eq!(err.to_string(), "no suggestion service configured");
    }
}
