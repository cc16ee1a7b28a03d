//! Bearer Token Header Handling
//!
//! Common utilities for extracting bearer credentials from HTTP headers.

use axum::http::{HeaderMap, header};

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No Authorization header present
    #[error("Missing Authorization header")]
    MissingHeader,

    /// Authorization header present but not a Bearer credential
    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract a bearer token from request headers
///
/// Expects `Authorization: Bearer <token>`. The scheme comparison is
/// case-insensitive per RFC 6750; the token itself is returned verbatim.
///
/// ## Returns
/// * `Ok(token)` - Non-empty token string
/// * `Err(BearerError)` - Header missing, wrong scheme, or empty token
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(BearerError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::Malformed);
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );

        assert_eq!(extract_bearer(&headers), Ok("abc123".to_string()));
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("bearer abc123"),
        );

        assert_eq!(extract_bearer(&headers), Ok("abc123".to_string()));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), Err(BearerError::MissingHeader));
    }

    #[test]
    fn test_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }

    #[test]
    fn test_empty_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));

        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }

    #[test]
    fn test_no_space() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearerabc"));

        assert_eq!(extract_bearer(&headers), Err(BearerError::Malformed));
    }
}
