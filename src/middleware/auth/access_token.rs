//! access token 検証 → profile 取得 → LineIdentity を extensions / LINE* ヘッダーに入れる
//!
//! - verify-access-token の `client_id` が自チャネルと一致した場合のみ get-user-profile を呼ぶ
//! - 成功時: `LINEUserID` / `LINEDisplayName` / `LINEPictureURL` / `LINEStatusMessage`
//! - 失敗時: 401 (body なし)。next は呼ばない

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::LineIdentity;

use super::authorizer::Authorizer;
use super::identity::propagate;
use super::rejection::AuthRejection;

/// Router 全体に access token 認証を掛ける。
pub fn apply<S>(router: Router<S>, authorizer: Authorizer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        authorizer,
        access_token_middleware,
    ))
}

pub async fn access_token_middleware(
    State(authorizer): State<Authorizer>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthRejection> {
    let profile = match authorizer.authorize_access_token(req.headers()).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(error = %err, "access token authorization failed");
            return Err(err);
        }
    };

    if let Err(err) = propagate(&mut req, LineIdentity::from(&profile)) {
        tracing::warn!(error = %err, user_id = %profile.user_id, "failed to propagate line identity");
        return Err(err);
    }
    req.extensions_mut().insert(profile);

    Ok(next.run(req).await)
}
