//! 検証済み LINE ユーザー情報を downstream に渡す
//!
//! - `LineIdentity` を request extensions に格納 (handler は extractor で受け取る)
//! - 互換用に `LINEUserID` などのリクエストヘッダーも設定する
//!
//! ヘッダー名は大文字小文字を区別しないため、内部表現は小文字。

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
};

use crate::api::extractors::LineIdentity;

use super::rejection::AuthRejection;

pub const LINE_USER_ID: HeaderName = HeaderName::from_static("lineuserid");
pub const LINE_DISPLAY_NAME: HeaderName = HeaderName::from_static("linedisplayname");
pub const LINE_PICTURE_URL: HeaderName = HeaderName::from_static("linepictureurl");
pub const LINE_EMAIL: HeaderName = HeaderName::from_static("lineemail");
pub const LINE_STATUS_MESSAGE: HeaderName = HeaderName::from_static("linestatusmessage");

const LINE_HEADERS: [HeaderName; 5] = [
    LINE_USER_ID,
    LINE_DISPLAY_NAME,
    LINE_PICTURE_URL,
    LINE_EMAIL,
    LINE_STATUS_MESSAGE,
];

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, AuthRejection> {
    // 表示名などは UTF-8 (obs-text) を許可、制御文字は不可
    HeaderValue::from_bytes(value.as_bytes())
        .map_err(|_| AuthRejection::InvalidIdentityAttribute(name))
}

/// Attach `identity` to the request.
///
/// All header values are encoded before anything is written, so on error the
/// request is left untouched. Every `LINE*` header already on the request
/// (e.g. sent by the client) is removed, including the one the other path sets.
pub fn propagate(req: &mut Request<Body>, identity: LineIdentity) -> Result<(), AuthRejection> {
    let mut headers = vec![
        (LINE_USER_ID, header_value("LINEUserID", &identity.user_id)?),
        (
            LINE_DISPLAY_NAME,
            header_value("LINEDisplayName", &identity.display_name)?,
        ),
        (
            LINE_PICTURE_URL,
            header_value("LINEPictureURL", &identity.picture_url)?,
        ),
    ];
    if let Some(email) = &identity.email {
        headers.push((LINE_EMAIL, header_value("LINEEmail", email)?));
    }
    if let Some(status_message) = &identity.status_message {
        headers.push((
            LINE_STATUS_MESSAGE,
            header_value("LINEStatusMessage", status_message)?,
        ));
    }

    for name in LINE_HEADERS {
        req.headers_mut().remove(name);
    }
    for (name, value) in headers {
        req.headers_mut().insert(name, value);
    }
    req.extensions_mut().insert(identity);

    Ok(())
}
