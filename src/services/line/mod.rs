/*
 * Responsibility
 * - LINE Login API (verify-id-token / verify-access-token / get-user-profile) の呼び出し
 * - レスポンス JSON の型定義
 * - 200 以外のステータスを LineError に対応付ける
 */
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use api::LineApi;
pub use client::LineClient;
pub use config::{Endpoints, LineClientConfig};
pub use error::{LineError, LineResult};
pub use types::{AccessTokenVerification, IdTokenClaims, Profile};
