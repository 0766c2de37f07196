//! Wire schema of the device REST API.
//!
//! DESIGN
//! ======
//! Field names follow the firmware's JSON (camelCase) through serde renames
//! so the structs keep Rust naming. Enumerations the firmware sends as
//! display strings (`"CET/CEST"`, `"WPA2-Personal"`) are enums here. The
//! timezone is closed; WiFi auth modes come from scans of arbitrary access
//! points, so they decode any string and fall back to `Unknown`. Fields the
//! firmware only sends when a lookup succeeds default to empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A text value did not name a known variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// =============================================================
// Auth
// =============================================================

/// Body of `PUT auth`: change the device's credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

// =============================================================
// Config
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostnameConfig {
    pub hostname: String,
}

/// MQTT broker connection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttConfig {
    /// Broker URI, e.g. `mqtt://broker.local:1883`.
    pub uri: String,
    pub username: String,
    pub password: String,
}

/// Timezone rules the firmware knows, named by their abbreviations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NtpTimezone {
    #[serde(rename = "ACST")]
    Acst,
    #[serde(rename = "ACST/ACDT")]
    AcstAcdt,
    #[serde(rename = "AEST")]
    Aest,
    #[serde(rename = "AEST/AEDT")]
    AestAedt,
    #[serde(rename = "AKST/AKDT")]
    AkstAkdt,
    #[serde(rename = "AST/ADT")]
    AstAdt,
    #[serde(rename = "AWST/AWDT")]
    AwstAwdt,
    #[serde(rename = "BRST/BRDT")]
    BrstBrdt,
    #[default]
    #[serde(rename = "CET/CEST")]
    CetCest,
    #[serde(rename = "CST")]
    Cst,
    #[serde(rename = "CST/CDT")]
    CstCdt,
    #[serde(rename = "EET/EEST")]
    EetEest,
    #[serde(rename = "EST/EDT")]
    EstEdt,
    #[serde(rename = "GMT/BST")]
    GmtBst,
    #[serde(rename = "GMT/IST")]
    GmtIst,
    #[serde(rename = "HAW")]
    Haw,
    #[serde(rename = "HKT")]
    Hkt,
    #[serde(rename = "MSK/MSD")]
    MskMsd,
    #[serde(rename = "RMST/RMDT")]
    RmstRmdt,
    #[serde(rename = "MST")]
    Mst,
    #[serde(rename = "MST/MDT")]
    MstMdt,
    #[serde(rename = "NST/NDT")]
    NstNdt,
    #[serde(rename = "NZST/NZDT")]
    NzstNzdt,
    #[serde(rename = "PST/PDT")]
    PstPdt,
    #[serde(rename = "SGT")]
    Sgt,
    #[serde(rename = "ULAT/ULAST")]
    UlatUlast,
    #[serde(rename = "WET/WEST")]
    WetWest,
    #[serde(rename = "WIB")]
    Wib,
}

impl NtpTimezone {
    /// Every timezone, in the order the selector lists them.
    pub const ALL: [Self; 28] = [
        Self::Acst,
        Self::AcstAcdt,
        Self::Aest,
        Self::AestAedt,
        Self::AkstAkdt,
        Self::AstAdt,
        Self::AwstAwdt,
        Self::BrstBrdt,
        Self::CetCest,
        Self::Cst,
        Self::CstCdt,
        Self::EetEest,
        Self::EstEdt,
        Self::GmtBst,
        Self::GmtIst,
        Self::Haw,
        Self::Hkt,
        Self::MskMsd,
        Self::RmstRmdt,
        Self::Mst,
        Self::MstMdt,
        Self::NstNdt,
        Self::NzstNzdt,
        Self::PstPdt,
        Self::Sgt,
        Self::UlatUlast,
        Self::WetWest,
        Self::Wib,
    ];

    /// Wire text, identical to what the firmware sends.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acst => "ACST",
            Self::AcstAcdt => "ACST/ACDT",
            Self::Aest => "AEST",
            Self::AestAedt => "AEST/AEDT",
            Self::AkstAkdt => "AKST/AKDT",
            Self::AstAdt => "AST/ADT",
            Self::AwstAwdt => "AWST/AWDT",
            Self::BrstBrdt => "BRST/BRDT",
            Self::CetCest => "CET/CEST",
            Self::Cst => "CST",
            Self::CstCdt => "CST/CDT",
            Self::EetEest => "EET/EEST",
            Self::EstEdt => "EST/EDT",
            Self::GmtBst => "GMT/BST",
            Self::GmtIst => "GMT/IST",
            Self::Haw => "HAW",
            Self::Hkt => "HKT",
            Self::MskMsd => "MSK/MSD",
            Self::RmstRmdt => "RMST/RMDT",
            Self::Mst => "MST",
            Self::MstMdt => "MST/MDT",
            Self::NstNdt => "NST/NDT",
            Self::NzstNzdt => "NZST/NZDT",
            Self::PstPdt => "PST/PDT",
            Self::Sgt => "SGT",
            Self::UlatUlast => "ULAT/ULAST",
            Self::WetWest => "WET/WEST",
            Self::Wib => "WIB",
        }
    }
}

impl fmt::Display for NtpTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NtpTimezone {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tz| tz.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant { kind: "timezone", value: s.to_owned() })
    }
}

/// NTP client settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NtpConfig {
    pub servers: Vec<String>,
    pub timezone: NtpTimezone,
}

// =============================================================
// WiFi
// =============================================================

/// WiFi authentication modes, as the firmware names them.
///
/// Only [`WifiAuthMode::ALL`] can be configured for the station; the rest
/// show up in scans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum WifiAuthMode {
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "WPA-Personal")]
    WpaPersonal,
    #[default]
    #[serde(rename = "WPA2-Personal")]
    Wpa2Personal,
    #[serde(rename = "WPA3-Personal")]
    Wpa3Personal,
    #[serde(rename = "WPA/WPA2-Personal")]
    WpaWpa2Personal,
    #[serde(rename = "WPA2/WPA3-Personal")]
    Wpa2Wpa3Personal,
    #[serde(rename = "WPA2-Enterprise")]
    Wpa2Enterprise,
    #[serde(rename = "WAPI-PSK")]
    WapiPsk,
    #[serde(rename = "OWE")]
    Owe,
    #[serde(rename = "unknown")]
    Unknown,
}

impl WifiAuthMode {
    /// Modes the station can be configured with.
    pub const ALL: [Self; 7] = [
        Self::Open,
        Self::Wep,
        Self::WpaPersonal,
        Self::Wpa2Personal,
        Self::Wpa3Personal,
        Self::WpaWpa2Personal,
        Self::Wpa2Wpa3Personal,
    ];

    /// Scan-only modes with a firmware name.
    const SCAN_ONLY: [Self; 3] = [Self::Wpa2Enterprise, Self::WapiPsk, Self::Owe];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::WpaPersonal => "WPA-Personal",
            Self::Wpa2Personal => "WPA2-Personal",
            Self::Wpa3Personal => "WPA3-Personal",
            Self::WpaWpa2Personal => "WPA/WPA2-Personal",
            Self::Wpa2Wpa3Personal => "WPA2/WPA3-Personal",
            Self::Wpa2Enterprise => "WPA2-Enterprise",
            Self::WapiPsk => "WAPI-PSK",
            Self::Owe => "OWE",
            Self::Unknown => "unknown",
        }
    }

    /// Mode named by firmware text, ignoring case. Unrecognized text is
    /// [`WifiAuthMode::Unknown`].
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .chain(Self::SCAN_ONLY)
            .find(|mode| mode.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub fn is_configurable(self) -> bool {
        Self::ALL.contains(&self)
    }

    /// Whether joining a network in this mode needs a pre-shared key.
    #[must_use]
    pub fn requires_psk(self) -> bool {
        match self {
            Self::Wep
            | Self::WpaPersonal
            | Self::Wpa2Personal
            | Self::Wpa3Personal
            | Self::WpaWpa2Personal
            | Self::Wpa2Wpa3Personal
            | Self::WapiPsk => true,
            Self::Open | Self::Wpa2Enterprise | Self::Owe | Self::Unknown => false,
        }
    }
}

impl<'de> Deserialize<'de> for WifiAuthMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

impl fmt::Display for WifiAuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a configurable mode only.
impl FromStr for WifiAuthMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Some(Self::from_wire(s))
            .filter(|mode| mode.is_configurable())
            .ok_or_else(|| UnknownVariant { kind: "wifi auth mode", value: s.to_owned() })
    }
}

/// Station-mode WiFi settings.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiConfig {
    pub auth_mode: WifiAuthMode,
    pub ssid: String,
    /// Pre-shared key; empty for open networks.
    pub psk: String,
}

impl fmt::Debug for WifiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiConfig")
            .field("auth_mode", &self.auth_mode)
            .field("ssid", &self.ssid)
            .finish_non_exhaustive()
    }
}

/// One access point from a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiAp {
    pub auth_mode: WifiAuthMode,
    pub bssid: String,
    /// The device is currently associated with this AP.
    pub in_use: bool,
    /// Signal strength in dBm.
    pub rssi: i32,
    pub ssid: String,
}

// =============================================================
// Outputs
// =============================================================

/// State of one switched power output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub index: u32,
    /// Over-current or fault indication.
    pub alert: bool,
    pub enabled: bool,
    /// Amperes.
    pub current: f64,
    /// Volts.
    pub voltage: f64,
}

impl Output {
    /// Power drawn, in watts.
    #[must_use]
    pub fn power(&self) -> f64 {
        self.current * self.voltage
    }
}

/// Body of `POST outputs/switch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSwitch {
    pub output: u32,
    pub state: bool,
}

// =============================================================
// System
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipInfo {
    pub cores: u32,
    pub model: String,
    pub revision: u32,
}

/// Empty fields when the interface has no address yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ipv4Info {
    pub address: String,
    pub netmask: String,
    pub gateway: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6Info {
    #[serde(default)]
    pub addresses: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    pub name: String,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub ipv4: Ipv4Info,
    #[serde(default)]
    pub ipv6: Ipv6Info,
    #[serde(default)]
    pub dns: Vec<String>,
    #[serde(default)]
    pub hostname: String,
    pub is_up: bool,
}

/// Heap usage in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapInfo {
    pub total: u64,
    pub free: u64,
}

impl HeapInfo {
    #[must_use]
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.free)
    }
}

/// Response of `GET system/info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub chip: ChipInfo,
    pub network: Vec<NetworkInterface>,
    pub heap: HeapInfo,
    /// Seconds since boot.
    pub uptime: u64,
    /// ESP-IDF version the firmware was built with.
    pub idf_version: String,
    /// Firmware version.
    pub version: String,
}
