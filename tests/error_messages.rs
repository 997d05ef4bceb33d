//! Tests to ensure error messages are actionable and consistent
//!
//! These tests verify that error messages name the offending input and say
//! what went wrong, both for configuration validation and for analysis errors.

use seo_audit::{validate_and_normalize_url, AnalysisError, Config, PerformanceError};

#[test]
fn test_config_validation_errors_are_descriptive() {
    let mut config = Config::default();

    config.timeout_seconds = 0;
    let result = config.validate();
    assert!(result.is_err(), "Zero timeout_seconds should fail validation");
    if let Err(e) = result {
        assert_eq!(e.field, "timeout_seconds");
        assert!(
            e.message.contains("greater than 0"),
            "Error should mention minimum value"
        );
    }

    config = Config::default();
    config.timeout_seconds = 301;
    let result = config.validate();
    assert!(result.is_err(), "Excessive timeout_seconds should fail validation");
    if let Err(e) = result {
        assert_eq!(e.field, "timeout_seconds");
        assert!(e.message.contains("300"), "Error should mention maximum value");
    }

    config = Config::default();
    config.pagespeed_endpoint = "not a url".to_string();
    let result = config.validate();
    assert!(result.is_err(), "Relative endpoint should fail validation");
    if let Err(e) = result {
        assert_eq!(e.field, "pagespeed_endpoint");
    }
}

#[test]
fn test_error_fields_are_specific() {
    let mut config = Config::default();
    config.user_agent = "   ".to_string();
    if let Err(e) = config.validate() {
        assert_eq!(e.field, "user_agent", "Should identify correct field");
        assert_eq!(
            e.to_string(),
            format!("Invalid value for `user_agent`: {}", e.message)
        );
    } else {
        panic!("Blank user agent should fail validation");
    }

    config = Config::default();
    config.pagespeed_api_key = Some(String::new());
    if let Err(e) = config.validate() {
        assert_eq!(e.field, "pagespeed_api_key", "Should identify correct field");
        assert!(e.message.contains("PAGESPEED_API_KEY"));
    } else {
        panic!("Blank API key should fail validation");
    }
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_invalid_url_errors_name_the_input() {
    let err = validate_and_normalize_url("ftp://example.com/file").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid URL 'ftp://example.com/file':"));
    assert!(message.contains("http"), "Error should say which schemes are accepted");

    let err = validate_and_normalize_url("   ").unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidUrl { .. }));
    assert!(err.to_string().contains("empty"));

    let long = format!("example.com/{}", "a".repeat(3000));
    let err = validate_and_normalize_url(&long).unwrap_err();
    assert!(err.to_string().contains("2048"));
}

#[test]
fn test_fetch_status_error_format() {
    let err = AnalysisError::HttpStatus {
        status: 404,
        reason: "Not Found".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to fetch URL: 404 Not Found");
}

#[test]
fn test_performance_error_messages() {
    assert_eq!(
        PerformanceError::MissingApiKey.to_string(),
        "PageSpeed API key is not configured"
    );
    let err = PerformanceError::HttpStatus {
        status: 403,
        reason: "Forbidden".to_string(),
    };
    assert_eq!(err.to_string(), "PageSpeed API returned 403: Forbidden");
    let err = PerformanceError::MissingField("lighthouseResult".to_string());
    assert!(err.to_string().contains("lighthouseResult"));
}
