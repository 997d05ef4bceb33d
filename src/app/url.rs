//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AnalysisError;

/// Validates and normalizes a URL supplied by the user.
///
/// Trims surrounding whitespace, adds an `https://` prefix if the scheme is
/// missing, then checks that the result parses, uses http/https, and has a
/// host. Rejects URLs longer than `MAX_URL_LENGTH`.
///
/// # Returns
///
/// The normalized URL as a string (exactly as it will be analyzed and
/// reported) together with its parsed form.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` describing why the input was rejected.
pub fn validate_and_normalize_url(url: &str) -> Result<(String, Url), AnalysisError> {
    let trimmed = url.trim();
    let invalid = |reason: &str| {
        warn!("Skipping invalid URL '{}': {}", trimmed, reason);
        AnalysisError::InvalidUrl {
            url: trimmed.to_string(),
            reason: reason.to_string(),
        }
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty"));
    }

    // Normalize: add https:// prefix if missing
    let normalized = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        if trimmed.contains("://") {
            return Err(invalid("only http and https URLs can be analyzed"));
        }
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    if normalized.chars().count() > MAX_URL_LENGTH {
        return Err(invalid(&format!(
            "URL exceeds the maximum length of {MAX_URL_LENGTH} characters"
        )));
    }

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
                Ok((normalized, parsed))
            }
            "http" | "https" => Err(invalid("URL has no host")),
            _ => Err(invalid("only http and https URLs can be analyzed")),
        },
        Err(e) => Err(invalid(&e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;
    use crate::error_handling::AnalysisError;

    fn normalized(url: &str) -> Option<String> {
        validate_and_normalize_url(url).ok().map(|(s, _)| s)
    }

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        assert_eq!(normalized("example.com"), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_scheme() {
        assert_eq!(
            normalized("https://example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            normalized("http://example.com"),
            Some("http://example.com".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_trims_whitespace() {
        assert_eq!(
            normalized("  example.com/page \n"),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_with_path_and_query() {
        assert_eq!(
            normalized("example.com/path?query=value"),
            Some("https://example.com/path?query=value".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_with_port() {
        assert_eq!(
            normalized("example.com:8080"),
            Some("https://example.com:8080".to_string())
        );
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_garbage() {
        let err = validate_and_normalize_url("not a valid url!!!").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_other_schemes() {
        assert!(normalized("ftp://example.com").is_none());
        assert!(normalized("file:///etc/passwd").is_none());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_empty() {
        assert!(normalized("").is_none());
        assert!(normalized("   ").is_none());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(3000));
        let err = validate_and_normalize_url(&long).unwrap_err();
        assert!(err.to_string().contains("maximum length"));
    }

    #[test]
    fn test_validate_and_normalize_url_ipv6() {
        assert_eq!(
            normalized("[2001:db8::1]/path"),
            Some("https://[2001:db8::1]/path".to_string())
        );
    }
}
