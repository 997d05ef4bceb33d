//! URL shape checks.

use crate::models::UrlStructure;

/// A URL is clean when it carries no query string or parameter separators.
pub fn analyze_url_structure(url: &str) -> UrlStructure {
    let is_clean = !url.contains('?') && !url.contains('&');
    UrlStructure {
        is_clean,
        has_dynamic_parameters: !is_clean,
        length: url.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url() {
        let structure = analyze_url_structure("https://example.com/blog/post");
        assert!(structure.is_clean);
        assert!(!structure.has_dynamic_parameters);
        assert_eq!(structure.length, 29);
    }

    #[test]
    fn test_query_string_is_dynamic() {
        let structure = analyze_url_structure("https://example.com/?p=1");
        assert!(!structure.is_clean);
        assert!(structure.has_dynamic_parameters);
    }

    #[test]
    fn test_ampersand_alone_is_dynamic() {
        assert!(!analyze_url_structure("https://example.com/a&b").is_clean);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(analyze_url_structure("https://exämple.com").length, 19);
    }
}
