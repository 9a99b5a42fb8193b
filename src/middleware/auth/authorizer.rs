//! Per-request decision procedure shared by both middlewares.
//!
//! ```text
//! Start → HeaderRead → TokenExtracted → Verified [→ ClientIdChecked → ProfileFetched] → Authorized
//! ```
//! Every step except `Authorized` can end in a rejection (401).

use std::{fmt, sync::Arc};

use axum::http::{HeaderMap, header};

use crate::services::line::{IdTokenClaims, LineApi, LineClient, Profile};

use super::bearer::extract_bearer;
use super::rejection::AuthRejection;

/// LINE Login の検証器
///
/// - `channel_id` は起動時に一度だけ設定 (以後 read-only)
/// - 可変状態を持たないので Clone して各 request から並行に使ってよい
#[derive(Clone)]
pub struct Authorizer {
    channel_id: Arc<str>,
    api: Arc<dyn LineApi>,
}

impl fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorizer")
            .field("channel_id", &self.channel_id)
            .finish_non_exhaustive()
    }
}

impl Authorizer {
    pub fn new(channel_id: impl Into<String>, api: Arc<dyn LineApi>) -> Self {
        Self {
            channel_id: Arc::from(channel_id.into()),
            api,
        }
    }

    /// The client's channel id becomes the expected one.
    pub fn from_client(client: LineClient) -> Self {
        let channel_id = client.channel_id().to_string();
        Self::new(channel_id, Arc::new(client))
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// verify-id-token を呼び、subject が空でないことを確認する
    pub async fn verify_id_token(
        &self,
        id_token: &str,
        user_id: Option<&str>,
        nonce: Option<&str>,
    ) -> Result<IdTokenClaims, AuthRejection> {
        let claims = self.api.verify_id_token(id_token, user_id, nonce).await?;
        if claims.sub.is_empty() {
            return Err(AuthRejection::EmptySubject);
        }
        Ok(claims)
    }

    /// verify-access-token → client_id 照合 → get-user-profile
    ///
    /// Profile is only fetched once the token is known to belong to this channel.
    pub async fn verify_access_token(&self, access_token: &str) -> Result<Profile, AuthRejection> {
        let verification = self.api.verify_access_token(access_token).await?;

        if verification.client_id != *self.channel_id {
            return Err(AuthRejection::ChannelMismatch {
                expected: self.channel_id.to_string(),
                actual: verification.client_id,
            });
        }

        let profile = self.api.get_profile(access_token).await?;
        if profile.user_id.is_empty() {
            return Err(AuthRejection::EmptyProfile);
        }
        Ok(profile)
    }

    /// `Authorization` ヘッダーの ID token を検証する (nonce / user id なし)
    pub async fn authorize_id_token(
        &self,
        headers: &HeaderMap,
    ) -> Result<IdTokenClaims, AuthRejection> {
        let id_token = bearer_from_headers(headers)?;
        self.verify_id_token(id_token, None, None).await
    }

    /// `Authorization` ヘッダーの access token を検証し profile を返す
    pub async fn authorize_access_token(
        &self,
        headers: &HeaderMap,
    ) -> Result<Profile, AuthRejection> {
        let access_token = bearer_from_headers(headers)?;
        self.verify_access_token(access_token).await
    }
}

fn bearer_from_headers(headers: &HeaderMap) -> Result<&str, AuthRejection> {
    let value = match headers.get(header::AUTHORIZATION) {
        None => return Err(AuthRejection::MissingAuthorizationHeader),
        Some(v) if v.is_empty() => return Err(AuthRejection::MissingAuthorizationHeader),
        Some(v) => v
            .to_str()
            .map_err(|_| AuthRejection::MalformedAuthorizationHeader)?,
    };

    extract_bearer(value)
}
