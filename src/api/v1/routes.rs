/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は認証なし、それ以外は LINE 認証 middleware を route 単位で適用
 */
use axum::{Router, routing::get};

use crate::config::AuthMode;
use crate::middleware::auth::{access_token, id_token};
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    hello::{hello, me},
};

pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(hello))
        .route("/me", get(me));

    let protected = match state.auth_mode {
        AuthMode::IdToken => id_token::apply(protected, state.authorizer.clone()),
        AuthMode::AccessToken => access_token::apply(protected, state.authorizer.clone()),
    };

    Router::new()
        .route("/health", get(health))
        .merge(protected)
}
