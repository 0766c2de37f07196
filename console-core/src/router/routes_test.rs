use super::*;

// =============================================================
// Route table
// =============================================================

#[test]
fn static_paths_resolve_to_their_routes() {
    assert_eq!(RouteName::resolve("/"), RouteName::Home);
    assert_eq!(RouteName::resolve("/auth/sign/in"), RouteName::SignIn);
    assert_eq!(RouteName::resolve("/config/auth"), RouteName::AuthConfig);
    assert_eq!(RouteName::resolve("/config/hostname"), RouteName::HostnameConfig);
    assert_eq!(RouteName::resolve("/config/mqtt"), RouteName::MqttConfig);
    assert_eq!(RouteName::resolve("/config/ntp"), RouteName::NtpConfig);
    assert_eq!(RouteName::resolve("/config/wifi"), RouteName::WifiConfig);
    assert_eq!(RouteName::resolve("/system/info"), RouteName::SystemInfo);
}

#[test]
fn every_static_route_resolves_from_its_own_path() {
    for (name, path) in STATIC_ROUTES {
        assert_eq!(RouteName::resolve(path), name);
        assert_eq!(name.path(), Some(path));
    }
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(RouteName::resolve("/config/wifi/"), RouteName::WifiConfig);
    assert_eq!(RouteName::resolve(""), RouteName::Home);
}

#[test]
fn unknown_paths_fall_into_not_found_routes() {
    assert_eq!(RouteName::resolve("/outputs"), RouteName::BadNotFound);
    assert_eq!(RouteName::resolve("/config/unknown"), RouteName::NotFound);
    assert_eq!(RouteName::resolve("/a/b/c"), RouteName::NotFound);
    assert_eq!(RouteName::BadNotFound.path(), None);
}

#[test]
fn allow_list_is_sign_in_and_not_found() {
    let public: Vec<_> = [
        RouteName::Home,
        RouteName::SignIn,
        RouteName::AuthConfig,
        RouteName::HostnameConfig,
        RouteName::MqttConfig,
        RouteName::NtpConfig,
        RouteName::WifiConfig,
        RouteName::SystemInfo,
        RouteName::BadNotFound,
        RouteName::NotFound,
    ]
    .into_iter()
    .filter(|r| r.is_public())
    .collect();
    assert_eq!(public, [RouteName::SignIn, RouteName::BadNotFound, RouteName::NotFound]);
}

// =============================================================
// Query
// =============================================================

#[test]
fn query_parses_and_encodes_percent_escapes() {
    let query = Query::parse("?redirect=%2Fconfig%2Fwifi&tab=2");
    assert_eq!(query.get(REDIRECT_PARAM), Some("/config/wifi"));
    assert_eq!(query.get("tab"), Some("2"));
    assert_eq!(query.encode(), "redirect=%2Fconfig%2Fwifi&tab=2");
}

#[test]
fn query_set_replaces_in_place() {
    let mut query = Query::parse("redirect=/a&x=1&redirect=/b");
    query.set(REDIRECT_PARAM, "/c");
    assert_eq!(query.encode(), "redirect=%2Fc&x=1");
}

#[test]
fn query_remove_drops_every_value() {
    let mut query = Query::parse("redirect=/a&redirect=/b&x=1");
    query.remove(REDIRECT_PARAM);
    assert_eq!(query.encode(), "x=1");
}

// =============================================================
// RouteLocation
// =============================================================

#[test]
fn location_splits_path_query_and_fragment() {
    let location = RouteLocation::parse("/config/ntp?x=1#top");
    assert_eq!(location.path, "/config/ntp");
    assert_eq!(location.query.get("x"), Some("1"));
    assert_eq!(location.name(), RouteName::NtpConfig);
}

#[test]
fn location_href_omits_empty_query() {
    assert_eq!(RouteLocation::parse("/system/info").href(), "/system/info");
    assert_eq!(RouteLocation::root().href(), "/");
    assert_eq!(RouteLocation::parse("").path, "/");
}

#[test]
fn sign_in_location_encodes_redirect() {
    let location = RouteLocation::sign_in(Query::new().with(REDIRECT_PARAM, "/config/wifi"));
    assert_eq!(location.to_string(), "/auth/sign/in?redirect=%2Fconfig%2Fwifi");
}
