use super::*;

#[test]
fn hostname_is_trimmed() {
    assert_eq!(validate_hostname("  pdu-01 ").unwrap().hostname, "pdu-01");
}

#[test]
fn hostname_rejects_bad_labels() {
    assert_eq!(validate_hostname("").unwrap_err(), "Enter a hostname.");
    assert_eq!(validate_hostname("pdu.local").unwrap_err(), "Hostname may only contain letters, digits and hyphens.");
    assert_eq!(validate_hostname("-pdu").unwrap_err(), "Hostname must not start or end with a hyphen.");
    assert_eq!(validate_hostname(&"a".repeat(64)).unwrap_err(), "Hostname must be at most 63 characters.");
}

#[test]
fn hostname_accepts_max_length() {
    assert!(validate_hostname(&"a".repeat(63)).is_ok());
}
