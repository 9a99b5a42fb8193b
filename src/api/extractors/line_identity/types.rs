/*
 * Responsibility
 * - Handler から見える「認証済み LINE ユーザー」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - token 検証や profile 取得は middleware/services 側の責務
 * - 互換用の LINE* リクエストヘッダーも同じ値から作る
 */
use serde::Serialize;

use crate::services::line::{IdTokenClaims, Profile};

/// 検証済みリクエストに付与される LINE ユーザー情報
///
/// - 任意項目は空文字で埋める (ヘッダーと同じ扱い)
/// - `email` は ID token 経路、`status_message` は access token 経路でのみ `Some`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineIdentity {
    pub user_id: String,
    pub display_name: String,
    pub picture_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl From<&IdTokenClaims> for LineIdentity {
    fn from(claims: &IdTokenClaims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            display_name: claims.name.clone().unwrap_or_default(),
            picture_url: claims.picture.clone().unwrap_or_default(),
            email: Some(claims.email.clone().unwrap_or_default()),
            status_message: None,
        }
    }
}

impl From<&Profile> for LineIdentity {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            display_name: profile.display_name.clone(),
            picture_url: profile.picture_url.clone().unwrap_or_default(),
            email: None,
            status_message: Some(profile.status_message.clone().unwrap_or_default()),
        }
    }
}
