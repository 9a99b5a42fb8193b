//! LINE Login API response shapes.
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// verify-id-token のレスポンス
///
/// See <https://developers.line.biz/ja/reference/line-login/#verify-id-token>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub iss: String,
    /// LINE user id
    pub sub: String,
    /// Channel id the token was issued for
    pub aud: String,
    /// Expiry (unix seconds)
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amr: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl IdTokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.exp, 0)
    }
}

/// verify-access-token のレスポンス
///
/// `client_id` が自チャネルと一致することを呼び出し側で確認すること。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenVerification {
    pub scope: String,
    pub client_id: String,
    /// Remaining validity (seconds)
    pub expires_in: i64,
}

impl AccessTokenVerification {
    /// `now + expires_in`. `None` when the provider value is out of range.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        TimeDelta::try_seconds(self.expires_in).and_then(|ttl| now.checked_add_signed(ttl))
    }
}

/// get-user-profile のレスポンス
///
/// See <https://developers.line.biz/ja/reference/line-login/#get-user-profile>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}
