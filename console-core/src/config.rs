//! Gateway configuration shared by the console and the CLI.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when nothing else is configured. Relative, so the console
/// talks to whichever device served it.
pub const DEFAULT_API_BASE_URL: &str = "/api/v1/";

/// Storage key the persisted session lives under.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Settings the request gateway is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base address every resource path is resolved against.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl GatewayConfig {
    /// Build a config from an optional override, falling back to
    /// [`DEFAULT_API_BASE_URL`] when the override is absent or blank.
    #[must_use]
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(value) if !value.is_empty() => Self { base_url: value.to_owned() },
            _ => Self::default(),
        }
    }

    /// Join a resource path onto the base address.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
