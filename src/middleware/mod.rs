/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - auth: LINE Login 認証 / http: request id, trace, timeout
 */
pub mod auth;
pub mod http;

pub use auth::{AuthRejection, Authorizer};
