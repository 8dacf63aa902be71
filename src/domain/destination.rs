//! Destination selection policy.

use crate::utils::url_validator::{is_valid_destination, validate_destination_url};

/// Where the chosen destination came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationSource {
    Primary,
    Fallback,
    Default,
}

impl DestinationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
            Self::Default => "default",
        }
    }
}

/// A validated outbound URL.
///
/// Record URLs are carried in their parsed serialization, so embedded tabs
/// and newlines are gone and non-ASCII hosts and paths are encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub url: String,
    pub source: DestinationSource,
}

/// Picks the outbound URL for a matched record.
///
/// The primary URL wins if it is a valid absolute `http(s)` URL, then the
/// fallback URL, then `default_url`. Whatever is picked is validated once
/// more and replaced by `default_url` if it still fails.
pub fn select_destination(
    primary: Option<&str>,
    fallback: Option<&str>,
    default_url: &str,
) -> Destination {
    let selected = if let Some(url) = usable(primary) {
        Destination {
            url,
            source: DestinationSource::Primary,
        }
    } else if let Some(url) = usable(fallback) {
        Destination {
            url,
            source: DestinationSource::Fallback,
        }
    } else {
        Destination {
            url: default_url.to_string(),
            source: DestinationSource::Default,
        }
    };

    if is_valid_destination(&selected.url) {
        selected
    } else {
        Destination {
            url: default_url.to_string(),
            source: DestinationSource::Default,
        }
    }
}

fn usable(candidate: Option<&str>) -> Option<String> {
    candidate
        .and_then(|url| validate_destination_url(url).ok())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "https://cogiflow.ai";

    #[test]
    fn test_primary_wins_when_valid() {
        let dest = select_destination(
            Some("https://partner.example/x"),
            Some("https://fallback.example"),
            DEFAULT,
        );
        assert_eq!(dest.url, "https://partner.example/x");
        assert_eq!(dest.source, DestinationSource::Primary);
    }

    #[test]
    fn test_primary_is_trimmed() {
        let dest = select_destination(Some("  https://partner.example/x \n"), None, DEFAULT);
        assert_eq!(dest.url, "https://partner.example/x");
    }

    #[test]
    fn test_fallback_when_primary_missing() {
        let dest = select_destination(None, Some("https://fallback.example/y"), DEFAULT);
        assert_eq!(dest.url, "https://fallback.example/y");
        assert_eq!(dest.source, DestinationSource::Fallback);
    }

    #[test]
    fn test_fallback_when_primary_invalid() {
        for primary in ["", "   ", "not a url", "javascript:alert(1)", "/relative"] {
            let dest = select_destination(Some(primary), Some("https://fallback.example"), DEFAULT);
            assert_eq!(dest.source, DestinationSource::Fallback, "primary {primary:?}");
        }
    }

    #[test]
    fn test_default_when_both_unusable() {
        let dest = select_destination(Some("ftp://x"), Some(""), DEFAULT);
        assert_eq!(dest.url, DEFAULT);
        assert_eq!(dest.source, DestinationSource::Default);

        let dest = select_destination(None, None, DEFAULT);
        assert_eq!(dest.url, DEFAULT);
    }

    #[test]
    fn test_control_characters_are_stripped() {
        let dest = select_destination(
            Some("https://partner.example/a\tb"),
            Some("https://fallback.example/"),
            DEFAULT,
        );
        assert_eq!(dest.url, "https://partner.example/ab");
        assert_eq!(dest.source, DestinationSource::Primary);

        let dest = select_destination(Some("https://partner.example/a\nb"), None, DEFAULT);
        assert_eq!(dest.url, "https://partner.example/ab");
    }

    #[test]
    fn test_non_ascii_destination_is_encoded() {
        let dest = select_destination(Some("https://bücher.example/ü"), None, DEFAULT);
        assert_eq!(dest.url, "https://xn--bcher-kva.example/%C3%BC");
        assert!(dest.url.is_ascii());
    }
}
