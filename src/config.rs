/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, LINE チャネル ID, 認証方式など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::line::{Endpoints, LineClientConfig, config::DEFAULT_HTTP_TIMEOUT_SECONDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// どちらの middleware を Router に掛けるか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    IdToken,
    AccessToken,
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id_token" | "idtoken" => Ok(Self::IdToken),
            "access_token" | "accesstoken" => Ok(Self::AccessToken),
            _ => Err(ConfigError::Invalid("LINE_AUTH_MODE")),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub auth_mode: AuthMode,
    pub line_channel_id: String,
    pub line_endpoints: Endpoints,
    pub line_http_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = get("PORT").and_then(|s| s.parse().ok()).unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = get("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let auth_mode = match get("LINE_AUTH_MODE") {
            Some(v) => v.parse()?,
            None => AuthMode::IdToken,
        };

        let line_channel_id = get("LINE_CHANNEL_ID")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("LINE_CHANNEL_ID"))?;

        let line_endpoints = match get("LINE_API_BASE_URL") {
            Some(base) => Endpoints::from_base_url(&base)
                .map_err(|_| ConfigError::Invalid("LINE_API_BASE_URL"))?,
            None => Endpoints::default(),
        };

        let line_http_timeout_seconds = match get("LINE_HTTP_TIMEOUT_SECONDS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("LINE_HTTP_TIMEOUT_SECONDS"))?,
            None => DEFAULT_HTTP_TIMEOUT_SECONDS,
        };

        Ok(Self {
            addr,
            app_env,
            auth_mode,
            line_channel_id,
            line_endpoints,
            line_http_timeout_seconds,
        })
    }

    pub fn line_client_config(&self) -> LineClientConfig {
        LineClientConfig::new(self.line_channel_id.clone())
            .with_endpoints(self.line_endpoints.clone())
            .with_http_timeout(self.line_http_timeout_seconds)
    }
}
