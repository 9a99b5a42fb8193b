/*!
 * LINE identity extractor
 *
 * Responsibility:
 * - 認証済みリクエストの LINE ユーザー情報（LineIdentity）を handler に提供する
 * - axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - LineIdentity
 * - LineIdentityExtractor
 */

mod core;
mod types;

pub use self::core::LineIdentityExtractor;
pub use self::types::LineIdentity;
