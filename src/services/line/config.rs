//! LINE Login API client configuration.
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://api.line.me";
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

const VERIFY_PATH: &str = "/oauth2/v2.1/verify";
const PROFILE_PATH: &str = "/v2/profile";

/// Endpoint table.
///
/// - verify-id-token / verify-access-token は同じ URL (メソッドで区別)
/// - テストやプロキシ経由の場合は `from_base_url` で差し替える
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub verify_id_token: Url,
    pub verify_access_token: Url,
    pub profile: Url,
}

impl Endpoints {
    pub fn from_base_url(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        Ok(Self {
            verify_id_token: base.join(VERIFY_PATH)?,
            verify_access_token: base.join(VERIFY_PATH)?,
            profile: base.join(PROFILE_PATH)?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        // DEFAULT_API_BASE_URL is a constant absolute URL
        Self::from_base_url(DEFAULT_API_BASE_URL).unwrap_or_else(|e| {
            unreachable!("invalid DEFAULT_API_BASE_URL: {e}")
        })
    }
}

/// Client configuration (immutable after construction).
#[derive(Debug, Clone)]
pub struct LineClientConfig {
    /// LINE Login channel id (OAuth2 client id)
    pub channel_id: String,
    pub endpoints: Endpoints,
    pub http_timeout_seconds: u64,
}

impl LineClientConfig {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            endpoints: Endpoints::default(),
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, url::ParseError> {
        self.endpoints = Endpoints::from_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_http_timeout(mut self, seconds: u64) -> Self {
        self.http_timeout_seconds = seconds;
        self
    }
}
