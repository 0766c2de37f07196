use super::*;

// =============================================================
// Helpers
// =============================================================

fn system_info_json() -> serde_json::Value {
    serde_json::json!({
        "chip": {"cores": 2, "model": "ESP32", "revision": 3},
        "network": [{
            "name": "st1",
            "macAddress": "24:0A:C4:00:00:01",
            "ipv4": {"address": "192.168.1.50", "netmask": "255.255.255.0", "gateway": "192.168.1.1"},
            "ipv6": {"addresses": ["FE80:0000:0000:0000:260A:C4FF:FE00:0001"]},
            "dns": ["192.168.1.1"],
            "hostname": "sbc-pdu",
            "isUp": true
        }],
        "heap": {"total": 300_000, "free": 120_000},
        "uptime": 3600,
        "idfVersion": "v5.1.2",
        "version": "0.3.0"
    })
}

// =============================================================
// Enumerations
// =============================================================

#[test]
fn timezone_uses_firmware_text() {
    assert_eq!(serde_json::to_string(&NtpTimezone::CetCest).unwrap(), r#""CET/CEST""#);
    let tz: NtpTimezone = serde_json::from_str(r#""NZST/NZDT""#).unwrap();
    assert_eq!(tz, NtpTimezone::NzstNzdt);
}

#[test]
fn timezone_text_matches_serde_for_every_variant() {
    for tz in NtpTimezone::ALL {
        assert_eq!(serde_json::to_string(&tz).unwrap(), format!("\"{tz}\""));
        assert_eq!(tz.as_str().parse::<NtpTimezone>().unwrap(), tz);
    }
}

#[test]
fn unknown_timezone_is_rejected() {
    assert!(serde_json::from_str::<NtpTimezone>(r#""UTC""#).is_err());
    let err = "UTC".parse::<NtpTimezone>().unwrap_err();
    assert_eq!(err.to_string(), "unknown timezone: UTC");
}

#[test]
fn timezone_parse_ignores_case() {
    assert_eq!("cet/cest".parse::<NtpTimezone>().unwrap(), NtpTimezone::CetCest);
}

#[test]
fn wifi_auth_mode_uses_firmware_text() {
    assert_eq!(serde_json::to_string(&WifiAuthMode::WpaWpa2Personal).unwrap(), r#""WPA/WPA2-Personal""#);
    for mode in WifiAuthMode::ALL {
        assert_eq!(serde_json::to_string(&mode).unwrap(), format!("\"{mode}\""));
        assert_eq!(mode.as_str().parse::<WifiAuthMode>().unwrap(), mode);
    }
}

#[test]
fn psk_requirement_follows_mode() {
    assert!(!WifiAuthMode::Open.requires_psk());
    assert!(WifiAuthMode::Wep.requires_psk());
    assert!(WifiAuthMode::Wpa3Personal.requires_psk());
    assert!(WifiAuthMode::WapiPsk.requires_psk());
    assert!(!WifiAuthMode::Wpa2Enterprise.requires_psk());
    assert!(!WifiAuthMode::Owe.requires_psk());
}

#[test]
fn wifi_auth_mode_decodes_any_firmware_text() {
    let decode = |raw: &str| serde_json::from_str::<WifiAuthMode>(&format!("\"{raw}\"")).unwrap();
    assert_eq!(decode("open"), WifiAuthMode::Open);
    assert_eq!(decode("OPEN"), WifiAuthMode::Open);
    assert_eq!(decode("WPA2-Enterprise"), WifiAuthMode::Wpa2Enterprise);
    assert_eq!(decode("WAPI-PSK"), WifiAuthMode::WapiPsk);
    assert_eq!(decode("OWE"), WifiAuthMode::Owe);
    assert_eq!(decode("unknown"), WifiAuthMode::Unknown);
    assert_eq!(decode("WPA4-Future"), WifiAuthMode::Unknown);
}

#[test]
fn scan_only_modes_do_not_parse_as_configuration() {
    assert!("OWE".parse::<WifiAuthMode>().is_err());
    assert!("unknown".parse::<WifiAuthMode>().is_err());
    assert_eq!("open".parse::<WifiAuthMode>().unwrap(), WifiAuthMode::Open);
    assert!(!WifiAuthMode::Wpa2Enterprise.is_configurable());
}

// =============================================================
// Structs
// =============================================================

#[test]
fn auth_config_serializes_camel_case() {
    let body = AuthConfig {
        username: "admin".to_owned(),
        old_password: "old".to_owned(),
        new_password: "new".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"username": "admin", "oldPassword": "old", "newPassword": "new"})
    );
}

#[test]
fn secrets_stay_out_of_debug() {
    let auth = AuthConfig {
        username: "admin".to_owned(),
        old_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
    };
    let wifi = WifiConfig { auth_mode: WifiAuthMode::Wpa2Personal, ssid: "lab".to_owned(), psk: "psk-secret".to_owned() };
    let rendered = format!("{auth:?} {wifi:?}");
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("lab"));
}

#[test]
fn wifi_config_serializes_camel_case() {
    let config = WifiConfig { auth_mode: WifiAuthMode::Open, ssid: "guest".to_owned(), psk: String::new() };
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::json!({"authMode": "Open", "ssid": "guest", "psk": ""})
    );
}

#[test]
fn wifi_scan_entry_decodes() {
    let ap: WifiAp = serde_json::from_str(
        r#"{"authMode":"WPA2-Personal","bssid":"AA:BB:CC:DD:EE:FF","inUse":true,"rssi":-61,"ssid":"lab"}"#,
    )
    .unwrap();
    assert!(ap.in_use);
    assert_eq!(ap.rssi, -61);
    assert_eq!(ap.auth_mode, WifiAuthMode::Wpa2Personal);
}

#[test]
fn ntp_config_decodes() {
    let config: NtpConfig =
        serde_json::from_str(r#"{"servers":["pool.ntp.org","time.google.com"],"timezone":"CET/CEST"}"#).unwrap();
    assert_eq!(config.servers.len(), 2);
    assert_eq!(config.timezone, NtpTimezone::CetCest);
}

#[test]
fn output_power_is_current_times_voltage() {
    let output: Output =
        serde_json::from_str(r#"{"index":1,"alert":false,"enabled":true,"current":0.5,"voltage":5.0}"#).unwrap();
    assert!((output.power() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn output_switch_body_shape() {
    let body = OutputSwitch { output: 3, state: false };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"output":3,"state":false}"#);
}

#[test]
fn system_info_decodes_firmware_payload() {
    let info: SystemInfo = serde_json::from_value(system_info_json()).unwrap();
    assert_eq!(info.chip.model, "ESP32");
    assert_eq!(info.idf_version, "v5.1.2");
    assert_eq!(info.network[0].mac_address, "24:0A:C4:00:00:01");
    assert!(info.network[0].is_up);
    assert_eq!(info.heap.used(), 180_000);
}

#[test]
fn system_info_tolerates_missing_ipv6_and_dns() {
    let mut json = system_info_json();
    let iface = json["network"][0].as_object_mut().unwrap();
    iface.remove("ipv6");
    iface.remove("dns");
    let info: SystemInfo = serde_json::from_value(json).unwrap();
    assert!(info.network[0].ipv6.addresses.is_empty());
    assert!(info.network[0].dns.is_empty());
}
