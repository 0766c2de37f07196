use super::*;

#[test]
fn default_uses_versioned_api_prefix() {
    assert_eq!(GatewayConfig::default().base_url, "/api/v1/");
}

#[test]
fn from_override_ignores_blank_values() {
    assert_eq!(GatewayConfig::from_override(None), GatewayConfig::default());
    assert_eq!(GatewayConfig::from_override(Some("   ")), GatewayConfig::default());
    assert_eq!(
        GatewayConfig::from_override(Some(" http://pdu.local/api/v1 ")).base_url,
        "http://pdu.local/api/v1"
    );
}

#[test]
fn resolve_joins_with_single_slash() {
    let config = GatewayConfig::default();
    assert_eq!(config.resolve("hostname"), "/api/v1/hostname");
    assert_eq!(config.resolve("/wifi/scan"), "/api/v1/wifi/scan");

    let remote = GatewayConfig::from_override(Some("http://10.0.0.5/api/v1"));
    assert_eq!(remote.resolve("outputs/switch"), "http://10.0.0.5/api/v1/outputs/switch");
}
