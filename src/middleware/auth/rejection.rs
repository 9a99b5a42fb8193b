use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::line::LineError;

/// Authorizer が request を拒否する理由
///
/// Every variant is an authentication failure: `status()` collapses all of
/// them to 401 and the response body is always empty (no detail leaked).
#[derive(Debug, Error)]
pub enum AuthRejection {
    #[error("missing authorization header")]
    MissingAuthorizationHeader,

    #[error("malformed authorization header")]
    MalformedAuthorizationHeader,

    #[error("token verification failed: {0}")]
    Verification(#[from] LineError),

    #[error("client id not match. get {actual} want {expected}")]
    ChannelMismatch { expected: String, actual: String },

    #[error("verified id token has empty subject")]
    EmptySubject,

    #[error("profile is empty")]
    EmptyProfile,

    #[error("identity attribute {0} is not a valid header value")]
    InvalidIdentityAttribute(&'static str),
}

impl AuthRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            // missing / malformed も 401 に揃える (400 にはしない)
            AuthRejection::MissingAuthorizationHeader
            | AuthRejection::MalformedAuthorizationHeader => StatusCode::UNAUTHORIZED,
            AuthRejection::Verification(_) => StatusCode::UNAUTHORIZED,
            // 別チャネル向けに発行された token は信用しない
            AuthRejection::ChannelMismatch { .. } => StatusCode::UNAUTHORIZED,
            AuthRejection::EmptySubject | AuthRejection::EmptyProfile => StatusCode::UNAUTHORIZED,
            AuthRejection::InvalidIdentityAttribute(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_rejection_is_401_with_empty_body() {
        let rejections = vec![
            AuthRejection::MissingAuthorizationHeader,
            AuthRejection::MalformedAuthorizationHeader,
            AuthRejection::Verification(LineError::RateLimited),
            AuthRejection::Verification(LineError::UnknownProviderError(502)),
            AuthRejection::ChannelMismatch {
                expected: "other".into(),
                actual: "expected".into(),
            },
            AuthRejection::EmptySubject,
            AuthRejection::EmptyProfile,
            AuthRejection::InvalidIdentityAttribute("LINEDisplayName"),
        ];

        for rejection in rejections {
            let res = rejection.into_response();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
            let body = axum::body::to_bytes(res.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(body.is_empty());
        }
    }
}
