use std::collections::HashSet;

use crate::charset::{DEFAULT_CHARSET, validate_charset};

#[test]
fn test_default_charset_order() {
    assert!(DEFAULT_CHARSET.starts_with("abcdefghijklmnopqrstuvwxyz"));
    assert_eq!(DEFAULT_CHARSET.find("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), Some(26));
    assert_eq!(DEFAULT_CHARSET.find("0123456789"), Some(52));
    assert!(DEFAULT_CHARSET.ends_with("{|}~"));
}

#[test]
fn test_default_charset_size() {
    // 26 lowercase + 26 uppercase + 10 digits + 32 punctuation symbols
    assert_eq!(DEFAULT_CHARSET.chars().count(), 94);
}

#[test]
fn test_default_charset_has_no_duplicates() {
    let mut seen = HashSet::new();
    assert!(DEFAULT_CHARSET.chars().all(|c| seen.insert(c)));
}

#[test]
fn test_validate_charset_valid() {
    assert!(validate_charset("ab").is_ok());
    assert!(validate_charset("a").is_ok());
    assert!(validate_charset(DEFAULT_CHARSET).is_ok());
}

#[test]
fn test_validate_charset_empty() {
    assert!(validate_charset("").is_err());
}

#[test]
fn test_validate_charset_tolerates_duplicates() {
    assert!(validate_charset("aab").is_ok());
}
