// Tests for target URL normalization

use gqlprobe_core::target::{TargetError, normalize_url};

#[test]
fn test_normalize_keeps_https() {
    assert_eq!(
        normalize_url("https://example.com/graphql").unwrap(),
        "https://example.com/graphql"
    );
}

#[test]
fn test_normalize_keeps_http() {
    assert_eq!(
        normalize_url("http://localhost:4000/graphql").unwrap(),
        "http://localhost:4000/graphql"
    );
}

#[test]
fn test_normalize_adds_https_when_scheme_missing() {
    assert_eq!(
        normalize_url("example.com/graphql").unwrap(),
        "https://example.com/graphql"
    );
}

#[test]
fn test_normalize_prefixes_exactly_once() {
    let once = normalize_url("example.com/graphql").unwrap();
    let twice = normalize_url(&once).unwrap();
    assert_eq!(twice, "https://example.com/graphql");
    assert_eq!(twice.matches("https://").count(), 1);
}

#[test]
fn test_normalize_scheme_check_is_case_sensitive() {
    assert_eq!(
        normalize_url("HTTPS://example.com").unwrap(),
        "https://HTTPS://example.com"
    );
}

#[test]
fn test_normalize_other_scheme_gets_prefixed() {
    assert_eq!(
        normalize_url("ftp://example.com").unwrap(),
        "https://ftp://example.com"
    );
}

#[test]
fn test_normalize_empty_is_missing() {
    assert_eq!(normalize_url(""), Err(TargetError::Missing));
    assert_eq!(TargetError::Missing.to_string(), "URL is required.");
}
