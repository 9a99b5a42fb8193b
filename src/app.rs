/*
 * Responsibility
 * - Config読み込み → LINE クライアント / Authorizer 生成 → Router 組み立て
 * - Middleware の適用 (LINE 認証 / request id / trace / timeout)
 * - axum::serve() で起動
 */
use std::time::Duration;

use axum::Router;

use crate::config::Config;
use crate::error::AppError;
use crate::middleware::{self, auth::Authorizer};
use crate::services::line::LineClient;
use crate::state::AppState;
use crate::{api, telemetry};

pub async fn run() -> Result<(), AppError> {
    telemetry::init_tracing();
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {} ({:?})",
        config.app_env,
        config.addr,
        config.auth_mode
    );

    let state = build_state(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config) -> Result<AppState, AppError> {
    // LineClient は reqwest::Client を内包 (接続プールを全 request で共有)
    let client = LineClient::new(config.line_client_config())?;
    let authorizer = Authorizer::from_client(client);

    Ok(AppState::new(authorizer, config.auth_mode))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = api::v1::routes(&state).with_state(state);

    // LINE API の timeout より少し長く取る
    let request_timeout = Duration::from_secs(config.line_http_timeout_seconds.saturating_mul(2));
    middleware::http::apply(router, request_timeout)
}
