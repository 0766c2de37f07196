//! Typed wrappers for the device's REST endpoints.
//!
//! Every call goes through [`Gateway`], so credentials are attached and a
//! `401` ends the session without any code here. Paths are relative to the
//! gateway's API base.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway::{Gateway, Transport};
use super::types::{
    AuthConfig, HostnameConfig, MqttConfig, NtpConfig, Output, OutputSwitch, SystemInfo, WifiAp, WifiConfig,
};
use crate::util::ipv6::normalize_address;

pub const AUTH_PATH: &str = "auth";
pub const HOSTNAME_PATH: &str = "hostname";
pub const MQTT_PATH: &str = "mqtt";
pub const NTP_PATH: &str = "ntp";
pub const WIFI_PATH: &str = "wifi";
pub const WIFI_SCAN_PATH: &str = "wifi/scan";
pub const OUTPUTS_PATH: &str = "outputs";
pub const OUTPUT_SWITCH_PATH: &str = "outputs/switch";
pub const SYSTEM_INFO_PATH: &str = "system/info";
pub const SYSTEM_RESTART_PATH: &str = "system/restart";

// =============================================================
// Auth
// =============================================================

/// Change the device's username and password.
///
/// The stored session still holds the old pair afterwards; callers sign in
/// again with the new one.
///
/// # Errors
///
/// Returns the gateway failure.
pub async fn update_credentials<T: Transport>(gw: &Gateway<T>, config: &AuthConfig) -> Result<(), ApiError> {
    gw.put_json(AUTH_PATH, config).await
}

// =============================================================
// Config
// =============================================================

/// # Errors
///
/// Returns the gateway failure.
pub async fn get_hostname<T: Transport>(gw: &Gateway<T>) -> Result<HostnameConfig, ApiError> {
    gw.get_json(HOSTNAME_PATH).await
}

/// # Errors
///
/// Returns the gateway failure.
pub async fn set_hostname<T: Transport>(gw: &Gateway<T>, config: &HostnameConfig) -> Result<(), ApiError> {
    gw.put_json(HOSTNAME_PATH, config).await
}

/// # Errors
///
/// Returns the gateway failure.
pub async fn get_mqtt<T: Transport>(gw: &Gateway<T>) -> Result<MqttConfig, ApiError> {
    gw.get_json(MQTT_PATH).await
}

/// # Errors
///
/// Returns the gateway failure.
pub async fn set_mqtt<T: Transport>(gw: &Gateway<T>, config: &MqttConfig) -> Result<(), ApiError> {
    gw.put_json(MQTT_PATH, config).await
}

/// # Errors
///
/// Returns the gateway failure.
pub async fn get_ntp<T: Transport>(gw: &Gateway<T>) -> Result<NtpConfig, ApiError> {
    gw.get_json(NTP_PATH).await
}

/// # Errors
///
/// Returns the gateway failure.
pub async fn set_ntp<T: Transport>(gw: &Gateway<T>, config: &NtpConfig) -> Result<(), ApiError> {
    gw.put_json(NTP_PATH, config).await
}

// =============================================================
// WiFi
// =============================================================

/// # Errors
///
/// Returns the gateway failure.
pub async fn get_wifi<T: Transport>(gw: &Gateway<T>) -> Result<WifiConfig, ApiError> {
    gw.get_json(WIFI_PATH).await
}

/// # Errors
///
/// Returns the gateway failure.
pub async fn set_wifi<T: Transport>(gw: &Gateway<T>, config: &WifiConfig) -> Result<(), ApiError> {
    gw.put_json(WIFI_PATH, config).await
}

/// Scan for access points. Slow on the device (several seconds).
///
/// # Errors
///
/// Returns the gateway failure.
pub async fn scan_wifi<T: Transport>(gw: &Gateway<T>) -> Result<Vec<WifiAp>, ApiError> {
    gw.get_json(WIFI_SCAN_PATH).await
}

// =============================================================
// Outputs
// =============================================================

/// # Errors
///
/// Returns the gateway failure.
pub async fn list_outputs<T: Transport>(gw: &Gateway<T>) -> Result<Vec<Output>, ApiError> {
    gw.get_json(OUTPUTS_PATH).await
}

/// Turn output `index` on or off.
///
/// # Errors
///
/// Returns the gateway failure.
pub async fn switch_output<T: Transport>(gw: &Gateway<T>, index: u32, state: bool) -> Result<(), ApiError> {
    gw.post_json(OUTPUT_SWITCH_PATH, &OutputSwitch { output: index, state }).await
}

// =============================================================
// System
// =============================================================

/// Fetch system information with IPv6 text in canonical form.
///
/// # Errors
///
/// Returns the gateway failure.
pub async fn system_info<T: Transport>(gw: &Gateway<T>) -> Result<SystemInfo, ApiError> {
    let info = gw.get_json(SYSTEM_INFO_PATH).await?;
    Ok(normalize_system_info(info))
}

/// Rewrite every IPv6 address and every IPv6 DNS entry to RFC 5952 form.
/// IPv4 DNS entries and unparsable text are left alone.
#[must_use]
pub fn normalize_system_info(mut info: SystemInfo) -> SystemInfo {
    for iface in &mut info.network {
        for address in &mut iface.ipv6.addresses {
            *address = normalize_address(address);
        }
        for dns in &mut iface.dns {
            *dns = normalize_address(dns);
        }
    }
    info
}

/// Reboot the device. The connection usually drops before the reply.
///
/// # Errors
///
/// Returns the gateway failure.
pub async fn restart<T: Transport>(gw: &Gateway<T>) -> Result<(), ApiError> {
    gw.post(SYSTEM_RESTART_PATH).await
}
