use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the backend rejected the session token itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            ApiError::Unauthorized("token expired".to_string()),
            ApiError::Status {
                status: 503,
                detail: "backend down".to_string(),
            },
            ApiError::Decode("not json".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn unauthorized_is_distinguishable() {
        assert!(ApiError::Unauthorized("bad token".to_string()).is_unauthorized());
        assert!(
            !ApiError::Status {
                status: 500,
                detail: "boom".to_string()
            }
            .is_unauthorized()
        );
    }
}
