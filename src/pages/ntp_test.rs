use super::*;

#[test]
fn servers_split_on_lines_and_commas() {
    assert_eq!(
        parse_servers("pool.ntp.org\n time.google.com , \n\n192.168.1.1"),
        ["pool.ntp.org", "time.google.com", "192.168.1.1"]
    );
}

#[test]
fn servers_drop_repeats_case_insensitively() {
    assert_eq!(parse_servers("pool.ntp.org\nPOOL.NTP.ORG"), ["pool.ntp.org"]);
}

#[test]
fn servers_format_one_per_line() {
    let servers = vec!["a.example".to_owned(), "b.example".to_owned()];
    assert_eq!(format_servers(&servers), "a.example\nb.example");
    assert_eq!(parse_servers(&format_servers(&servers)), servers);
}

#[test]
fn ntp_requires_a_server() {
    assert_eq!(validate_ntp(" \n , ", NtpTimezone::CetCest).unwrap_err(), "Enter at least one NTP server.");
    assert_eq!(
        validate_ntp("pool ntp org", NtpTimezone::CetCest).unwrap_err(),
        "Server names must not contain spaces."
    );
}

#[test]
fn ntp_keeps_selected_timezone() {
    let config = validate_ntp("pool.ntp.org", NtpTimezone::PstPdt).unwrap();
    assert_eq!(config.timezone, NtpTimezone::PstPdt);
}
