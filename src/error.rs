/*
 * Responsibility
 * - デモサーバー起動時のエラー (設定不足 / LINE クライアント生成 / bind)
 * - request 単位の拒否は middleware::auth::AuthRejection が担当
 */
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::line::LineError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build LINE client: {0}")]
    LineClient(#[from] LineError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
