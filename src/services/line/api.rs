use async_trait::async_trait;

use super::error::LineResult;
use super::types::{AccessTokenVerification, IdTokenClaims, Profile};

/// LINE Login API の 3 操作
///
/// Authorizer はこの trait 越しに呼び出す (本番は `LineClient`、テストは double)。
/// Implementations must not cache: every call is one round trip.
#[async_trait]
pub trait LineApi: Send + Sync {
    /// `user_id` / `nonce` は使わない場合 `None`
    async fn verify_id_token(
        &self,
        id_token: &str,
        user_id: Option<&str>,
        nonce: Option<&str>,
    ) -> LineResult<IdTokenClaims>;

    async fn verify_access_token(&self, access_token: &str)
    -> LineResult<AccessTokenVerification>;

    async fn get_profile(&self, access_token: &str) -> LineResult<Profile>;
}
