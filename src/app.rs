//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the credential store and request gateway once and provides
//! them through context. `Shell` lives inside the router and runs the two
//! session-driven behaviors: the navigation guard on every location change
//! and the listener that turns store events into navigations.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use console_core::config::GatewayConfig;
use console_core::router::guard::{self, AuthPhase};
use console_core::router::navigation::navigation_for_batch;
use console_core::router::routes::{Query, RouteLocation};
use console_core::state::auth::{CredentialStore, LogIdentity};
use console_core::state::events::drain_pending;
use futures::StreamExt;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{nav_bar::NavBar, protected::Protected};
use crate::net::browser::{BrowserTransport, ConsoleGateway};
use crate::pages::{
    auth_config::AuthConfigPage, home::HomePage, hostname::HostnamePage, mqtt::MqttPage, not_found::NotFoundPage,
    ntp::NtpPage, sign_in::SignInPage, system_info::SystemInfoPage, wifi::WifiPage,
};
use crate::state::auth::AuthState;
use crate::util::browser_storage::LocalStorage;

/// Route location from the router's pathname and search string. The search
/// may or may not carry its leading `?`.
pub fn current_location(pathname: &str, search: &str) -> RouteLocation {
    let path = if pathname.is_empty() { "/" } else { pathname };
    RouteLocation::new(path, Query::parse(search.trim_start_matches('?')))
}

/// Document title for `location`.
pub fn document_title(location: &RouteLocation) -> String {
    format!("{} | SBC PDU", location.name().title())
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = CredentialStore::restore(Arc::new(LocalStorage), Arc::new(LogIdentity));
    let config = GatewayConfig::from_override(option_env!("PDU_API_BASE_URL"));
    log::info!("app: api base {}", config.base_url);
    let gateway: ConsoleGateway = ConsoleGateway::new(config, BrowserTransport, store.clone());
    let auth = RwSignal::new(AuthState::from_store(&store));

    provide_context(store);
    provide_context(gateway);
    provide_context(auth);

    view! {
        <Router>
            <Shell/>
        </Router>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let store = expect_context::<CredentialStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let navigate = use_navigate();

    // Guard: the session is read untracked, sign-in and sign-out navigate
    // through the listener below.
    let previous = StoredValue::new(None::<RouteLocation>);
    Effect::new({
        let store = store.clone();
        let navigate = navigate.clone();
        move |_| {
            let to = current_location(&pathname.get(), &search.get());
            let phase = AuthPhase::from_logged_in(store.is_logged_in());
            let from = previous.get_value();
            match guard::evaluate(phase, &to, from.as_ref()) {
                guard::GuardDecision::Proceed => previous.set_value(Some(to)),
                guard::GuardDecision::Redirect(target) => {
                    navigate(&target.href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
        }
    });

    let mut events = store.subscribe();
    leptos::task::spawn_local(async move {
        while let Some(first) = events.next().await {
            let batch = drain_pending(&mut events, first);
            auth.update(|state| batch.iter().for_each(|event| state.apply(event)));
            let current = current_location(&pathname.get_untracked(), &search.get_untracked());
            if let Some(href) = navigation_for_batch(batch, &current) {
                log::debug!("app: session change at {} -> {href}", current.href());
                navigate(&href, NavigateOptions::default());
            }
        }
    });

    let title = move || document_title(&current_location(&pathname.get(), &search.get()));

    view! {
        <Title text=title/>
        <NavBar/>
        <main class="content">
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=|| view! { <Protected><HomePage/></Protected> }/>
                <Route path=(StaticSegment("auth"), StaticSegment("sign"), StaticSegment("in")) view=SignInPage/>
                <Route
                    path=(StaticSegment("config"), StaticSegment("auth"))
                    view=|| view! { <Protected><AuthConfigPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("config"), StaticSegment("hostname"))
                    view=|| view! { <Protected><HostnamePage/></Protected> }
                />
                <Route
                    path=(StaticSegment("config"), StaticSegment("mqtt"))
                    view=|| view! { <Protected><MqttPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("config"), StaticSegment("ntp"))
                    view=|| view! { <Protected><NtpPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("config"), StaticSegment("wifi"))
                    view=|| view! { <Protected><WifiPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("system"), StaticSegment("info"))
                    view=|| view! { <Protected><SystemInfoPage/></Protected> }
                />
            </Routes>
        </main>
    }
}
