/*
 * Responsibility
 * - GET /    : LINEDisplayName ヘッダーを読んで挨拶を返す (ヘッダー経由の受け取り例)
 * - GET /me  : LineIdentity を JSON で返す (extractor 経由の受け取り例)
 */
use axum::{Json, http::HeaderMap};

use crate::api::extractors::{LineIdentity, LineIdentityExtractor};
use crate::middleware::auth::identity::LINE_DISPLAY_NAME;

pub async fn hello(headers: HeaderMap) -> String {
    let name = headers
        .get(LINE_DISPLAY_NAME)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    tracing::info!("hello, {}", name);
    format!("hello,{name}")
}

pub async fn me(LineIdentityExtractor(identity): LineIdentityExtractor) -> Json<LineIdentity> {
    Json(identity)
}
