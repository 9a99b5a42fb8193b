/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::config::AuthMode;
use crate::middleware::auth::Authorizer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub authorizer: Authorizer,
    pub auth_mode: AuthMode,
}

impl AppState {
    pub fn new(authorizer: Authorizer, auth_mode: AuthMode) -> Self {
        Self {
            authorizer,
            auth_mode,
        }
    }
}
