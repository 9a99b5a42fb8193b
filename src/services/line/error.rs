//! LINE Login API client errors.
use reqwest::StatusCode;
use thiserror::Error;

/// Result type for LINE Login API calls.
pub type LineResult<T> = Result<T, LineError>;

/// Errors returned by `LineClient`.
///
/// Note:
/// - Kept independent from `AuthRejection` / `AppError` so direct API consumers
///   can decide how to react (retry on `RateLimited`, etc.).
/// - Provider statuses are mapped in one place (`from_status`).
#[derive(Debug, Error)]
pub enum LineError {
    #[error("{0} not found")]
    EmptyCredential(&'static str),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    // 400 リクエストパラメータと JSON の形式を確認
    #[error("400 Bad Request")]
    BadRequest,

    // 401 Authorization ヘッダーを確認
    #[error("401 Unauthorized")]
    Unauthorized,

    // 403 API を使用する権限がない
    #[error("403 Forbidden")]
    Forbidden,

    // 429 レート制限超過
    #[error("429 Too Many Requests")]
    RateLimited,

    // 500 API サーバーの一時的なエラー
    #[error("500 Internal Server Error")]
    ProviderInternalError,

    #[error("unknown status code {0}")]
    UnknownProviderError(u16),
}

impl LineError {
    /// Map a non-200 provider status to its error.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            StatusCode::INTERNAL_SERVER_ERROR => Self::ProviderInternalError,
            other => Self::UnknownProviderError(other.as_u16()),
        }
    }

    /// The provider status this error was built from, if any.
    pub fn provider_status(&self) -> Option<StatusCode> {
        match self {
            Self::BadRequest => Some(StatusCode::BAD_REQUEST),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden => Some(StatusCode::FORBIDDEN),
            Self::RateLimited => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::ProviderInternalError => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Self::UnknownProviderError(code) => StatusCode::from_u16(*code).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_dedicated_variants() {
        assert!(matches!(
            LineError::from_status(StatusCode::BAD_REQUEST),
            LineError::BadRequest
        ));
        assert!(matches!(
            LineError::from_status(StatusCode::UNAUTHORIZED),
            LineError::Unauthorized
        ));
        assert!(matches!(
            LineError::from_status(StatusCode::FORBIDDEN),
            LineError::Forbidden
        ));
        assert!(matches!(
            LineError::from_status(StatusCode::TOO_MANY_REQUESTS),
            LineError::RateLimited
        ));
        assert!(matches!(
            LineError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            LineError::ProviderInternalError
        ));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = LineError::from_status(StatusCode::BAD_GATEWAY);
        assert!(matches!(err, LineError::UnknownProviderError(502)));
        assert_eq!(err.provider_status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(err.to_string(), "unknown status code 502");
    }

    #[test]
    fn provider_status_inverts_from_status() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert_eq!(LineError::from_status(status).provider_status(), Some(status));
        }
        assert_eq!(LineError::EmptyCredential("ID Token").provider_status(), None);
    }
}
