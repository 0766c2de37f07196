use super::*;

#[test]
fn validate_sign_in_trims_username_only() {
    let credentials = validate_sign_in("  admin ", " pass ").unwrap();
    assert_eq!(credentials, Credentials::new("admin", " pass "));
}

#[test]
fn validate_sign_in_requires_both_fields() {
    assert_eq!(validate_sign_in("   ", "pw").unwrap_err(), "Enter username and password.");
    assert_eq!(validate_sign_in("admin", "").unwrap_err(), "Enter username and password.");
}
