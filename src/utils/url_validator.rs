//! Destination URL validation.
//!
//! A destination is only usable if it is an absolute `http` or `https`
//! URL with a host. Anything else (relative paths, `javascript:`, `data:`,
//! `file:` and friends) is rejected.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Validates a candidate destination URL.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] if the input is not an absolute URL
/// - [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// - [`UrlValidationError::MissingHost`] if the URL has no host
///
/// # Examples
///
/// ```ignore
/// assert!(validate_destination_url("https://partner.example/x").is_ok());
/// assert!(validate_destination_url("/relative/path").is_err());
/// assert!(validate_destination_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_destination_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

/// Returns `true` if `input` is a usable destination URL.
pub fn is_valid_destination(input: &str) -> bool {
    validate_destination_url(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_destination("http://example.com"));
        assert!(is_valid_destination("https://partner.example/x"));
        assert!(is_valid_destination("https://example.com:8443/a?b=c#d"));
    }

    #[test]
    fn test_ignores_surrounding_whitespace() {
        assert!(is_valid_destination("  https://example.com/  "));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_destination_url(""), Err(UrlValidationError::Empty));
        assert_eq!(
            validate_destination_url("   "),
            Err(UrlValidationError::Empty)
        );
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_destination_url("/partner/x"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_destination_url("partner.example/x"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,<h1>hi</h1>",
            "file:///etc/passwd",
            "ftp://example.com/file",
            "mailto:someone@example.com",
        ] {
            assert_eq!(
                validate_destination_url(input),
                Err(UrlValidationError::UnsupportedProtocol),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_returns_parsed_url() {
        let url = validate_destination_url("https://Partner.Example/x").unwrap();
        assert_eq!(url.host_str(), Some("partner.example"));
        assert_eq!(url.path(), "/x");
    }
}
