use deadlock_demo::parse_duration;
use std::time::Duration;

#[test]
fn test_bare_number_is_seconds() {
    assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(parse_duration("  500ms ").unwrap(), Duration::from_millis(500));
}

#[test]
fn test_zero_delay_allowed() {
    assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
}

#[test]
fn test_invalid_inputs() {
    assert!(parse_duration("").is_err());
    assert!(parse_duration("abc").is_err());
    assert!(parse_duration("1h").is_err());
    assert!(parse_duration("-5s").is_err());
    assert!(parse_duration("1.5s").is_err());
}
