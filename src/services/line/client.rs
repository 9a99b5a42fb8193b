//! HTTP client for the LINE Login API.
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api::LineApi;
use super::config::{Endpoints, LineClientConfig};
use super::error::{LineError, LineResult};
use super::types::{AccessTokenVerification, IdTokenClaims, Profile};

/// LINE Login API client.
///
/// - Clone is cheap (`reqwest::Client` is `Arc` inside)
/// - No retry / no cache
#[derive(Debug, Clone)]
pub struct LineClient {
    http: Client,
    channel_id: String,
    endpoints: Endpoints,
}

impl LineClient {
    pub fn new(config: LineClientConfig) -> LineResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()?;

        Ok(Self::with_http_client(config, http))
    }

    /// Use a caller-provided `reqwest::Client` (shared pool, proxy, etc.).
    /// `config.http_timeout_seconds` is ignored in this case.
    pub fn with_http_client(config: LineClientConfig, http: Client) -> Self {
        Self {
            http,
            channel_id: config.channel_id,
            endpoints: config.endpoints,
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// verify-id-token を呼ぶ
    ///
    /// `user_id` / `nonce` は使わない場合 `None` (空文字も送らない)
    pub async fn verify_id_token(
        &self,
        id_token: &str,
        user_id: Option<&str>,
        nonce: Option<&str>,
    ) -> LineResult<IdTokenClaims> {
        if id_token.is_empty() {
            return Err(LineError::EmptyCredential("ID Token"));
        }

        let mut form = vec![("id_token", id_token), ("client_id", self.channel_id.as_str())];
        if let Some(nonce) = nonce.filter(|s| !s.is_empty()) {
            form.push(("nonce", nonce));
        }
        if let Some(user_id) = user_id.filter(|s| !s.is_empty()) {
            form.push(("user_id", user_id));
        }

        let req = self
            .http
            .post(self.endpoints.verify_id_token.clone())
            .bearer_auth(id_token)
            .form(&form);

        let claims: IdTokenClaims = send_and_decode(req).await?;
        debug!(sub = %claims.sub, "id token verified");
        Ok(claims)
    }

    /// verify-access-token を呼ぶ (token は query parameter)
    pub async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> LineResult<AccessTokenVerification> {
        if access_token.is_empty() {
            return Err(LineError::EmptyCredential("Access Token"));
        }

        let req = self
            .http
            .get(self.endpoints.verify_access_token.clone())
            .query(&[("access_token", access_token)]);

        let res: AccessTokenVerification = send_and_decode(req).await?;
        debug!(
            client_id = %res.client_id,
            expires_at = ?res.expires_at(Utc::now()),
            "access token verified"
        );
        Ok(res)
    }

    /// get-user-profile を呼ぶ
    pub async fn get_profile(&self, access_token: &str) -> LineResult<Profile> {
        if access_token.is_empty() {
            return Err(LineError::EmptyCredential("Access Token"));
        }

        let req = self
            .http
            .get(self.endpoints.profile.clone())
            .bearer_auth(access_token);

        let profile: Profile = send_and_decode(req).await?;
        debug!(user_id = %profile.user_id, "profile fetched");
        Ok(profile)
    }
}

#[async_trait]
impl LineApi for LineClient {
    async fn verify_id_token(
        &self,
        id_token: &str,
        user_id: Option<&str>,
        nonce: Option<&str>,
    ) -> LineResult<IdTokenClaims> {
        LineClient::verify_id_token(self, id_token, user_id, nonce).await
    }

    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> LineResult<AccessTokenVerification> {
        LineClient::verify_access_token(self, access_token).await
    }

    async fn get_profile(&self, access_token: &str) -> LineResult<Profile> {
        LineClient::get_profile(self, access_token).await
    }
}

// 200 以外は body を読まずにエラー化、200 は JSON として decode
async fn send_and_decode<T: DeserializeOwned>(req: RequestBuilder) -> LineResult<T> {
    let res = req.send().await?;

    let status = res.status();
    if status != StatusCode::OK {
        return Err(LineError::from_status(status));
    }

    let body = res.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
