use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::LineIdentity;

/// Handler で LineIdentity を受け取るための extractor
/// middleware が LineIdentity を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（ミドルウェア未設定）
pub struct LineIdentityExtractor(pub LineIdentity);

impl<S> FromRequestParts<S> for LineIdentityExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<LineIdentity>()
            .cloned()
            .map(LineIdentityExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
