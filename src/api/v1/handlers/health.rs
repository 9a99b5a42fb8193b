/*
 * Responsibility
 * - GET /health (疎通用, 認証なし)
 * - どちらの LINE 認証 middleware が有効かを返す
 */
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::config::AuthMode;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let auth_mode = match state.auth_mode {
        AuthMode::IdToken => "id_token",
        AuthMode::AccessToken => "access_token",
    };

    Json(json!({
        "status": "ok",
        "auth_mode": auth_mode,
        "channel_id": state.authorizer.channel_id(),
    }))
}
