/*
 * Responsibility
 * - LINE Login による認証 middleware (ID token / access token の 2 種)
 * - ヘッダー抽出 → 検証 → 拒否 or LineIdentity の受け渡し
 * - 認可 (permission) は handler/service 側の責務
 */
pub mod access_token;
pub mod authorizer;
pub mod bearer;
pub mod id_token;
pub mod identity;
pub mod rejection;

pub use authorizer::Authorizer;
pub use bearer::extract_bearer;
pub use rejection::AuthRejection;
