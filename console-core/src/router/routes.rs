//! Static route table and location descriptors.
//!
//! DESIGN
//! ======
//! Routes are a closed enum so the guard can match on them exhaustively.
//! Any path that is not in the table resolves to one of the two not-found
//! routes, which keeps `resolve` total.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

use url::form_urlencoded;

pub const ROOT_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/auth/sign/in";
/// Query parameter that carries the post-sign-in destination.
pub const REDIRECT_PARAM: &str = "redirect";

/// Every screen of the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    SignIn,
    AuthConfig,
    HostnameConfig,
    MqttConfig,
    NtpConfig,
    WifiConfig,
    SystemInfo,
    /// Unknown single-segment path.
    BadNotFound,
    /// Any other unknown path.
    NotFound,
}

/// Routes reachable without a session.
pub const PUBLIC_ROUTES: [RouteName; 3] = [RouteName::BadNotFound, RouteName::NotFound, RouteName::SignIn];

/// Routes with a fixed path, in table order.
const STATIC_ROUTES: [(RouteName, &str); 8] = [
    (RouteName::Home, ROOT_PATH),
    (RouteName::SignIn, SIGN_IN_PATH),
    (RouteName::AuthConfig, "/config/auth"),
    (RouteName::HostnameConfig, "/config/hostname"),
    (RouteName::MqttConfig, "/config/mqtt"),
    (RouteName::NtpConfig, "/config/ntp"),
    (RouteName::WifiConfig, "/config/wifi"),
    (RouteName::SystemInfo, "/system/info"),
];

impl RouteName {
    /// Fixed path of the route; `None` for the not-found catch-alls.
    #[must_use]
    pub fn path(self) -> Option<&'static str> {
        STATIC_ROUTES.iter().find(|(name, _)| *name == self).map(|(_, path)| *path)
    }

    #[must_use]
    pub fn is_public(self) -> bool {
        PUBLIC_ROUTES.contains(&self)
    }

    /// Heading shown for the route.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Outputs",
            Self::SignIn => "Sign in",
            Self::AuthConfig => "Credentials",
            Self::HostnameConfig => "Hostname",
            Self::MqttConfig => "MQTT",
            Self::NtpConfig => "NTP",
            Self::WifiConfig => "WiFi",
            Self::SystemInfo => "System information",
            Self::BadNotFound | Self::NotFound => "Not found",
        }
    }

    /// Resolve a path (without query) to its route.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = normalize_path(path);
        if let Some((name, _)) = STATIC_ROUTES.iter().find(|(_, p)| *p == path) {
            return *name;
        }
        if path[1..].contains('/') { Self::NotFound } else { Self::BadNotFound }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Leading `/` ensured, trailing `/` dropped except for the root.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Ordered query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query(Vec<(String, String)>);

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a query string, with or without the leading `?`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    /// First value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Replace every value of `key` with `value`, keeping its first position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = false;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.0.push((key.to_owned(), value)),
        }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode without the leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new()).extend_pairs(self.0.iter()).finish()
    }
}

/// A navigation target or source: path plus query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteLocation {
    pub path: String,
    pub query: Query,
}

impl RouteLocation {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        let path = path.into();
        let path = if path.is_empty() { ROOT_PATH.to_owned() } else { path };
        Self { path, query }
    }

    /// The sign-in route with `query`.
    #[must_use]
    pub fn sign_in(query: Query) -> Self {
        Self::new(SIGN_IN_PATH, query)
    }

    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_PATH, Query::new())
    }

    /// Split an href (`/path?query#fragment`) into its path and query.
    /// The fragment is dropped.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        match href.split_once('?') {
            Some((path, query)) => Self::new(path, Query::parse(query)),
            None => Self::new(href, Query::new()),
        }
    }

    #[must_use]
    pub fn name(&self) -> RouteName {
        RouteName::resolve(&self.path)
    }

    /// Path plus encoded query, ready to hand to the router.
    #[must_use]
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}

impl fmt::Display for RouteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
