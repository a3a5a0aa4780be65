use thiserror::Error;

/// Client-side API errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response from the backend. Carries the numeric status and the
    /// canonical reason phrase; never retried.
    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// True for a 404, which detail screens render as "Not Found" with only
    /// a back action.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound(_) | ApiError::Status { status: 404, .. }
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(ApiError::NotFound("book ba-1".into()).is_not_found());
        assert!(ApiError::Status {
            status: 404,
            reason: "Not Found".into()
        }
        .is_not_found());
        assert!(!ApiError::Status {
            status: 500,
            reason: "Internal Server Error".into()
        }
        .is_not_found());
    }

    #[test]
    fn status_error_displays_code_and_reason() {
        let err = ApiError::Status {
            status: 503,
            reason: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error: 503 Service Unavailable");
    }
}
