//! `Authorization: Bearer <token>` の分解
use super::rejection::AuthRejection;

const BEARER_SEPARATOR: &str = "Bearer ";

/// Extract the credential from an `Authorization` header value.
///
/// The value must split on `"Bearer "` into exactly two parts with nothing
/// before the separator. The token itself is returned untouched (no trim).
pub fn extract_bearer(header_value: &str) -> Result<&str, AuthRejection> {
    if header_value.is_empty() {
        return Err(AuthRejection::MalformedAuthorizationHeader);
    }

    let mut parts = header_value.split(BEARER_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(""), Some(token), None) => Ok(token),
        _ => Err(AuthRejection::MalformedAuthorizationHeader),
    }
}
