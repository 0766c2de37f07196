//! Top navigation bar with the route links and the session menu.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use console_core::router::routes::RouteName;
use console_core::state::auth::CredentialStore;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

/// Routes listed in the bar, in display order.
const NAV_ROUTES: [RouteName; 7] = [
    RouteName::Home,
    RouteName::SystemInfo,
    RouteName::WifiConfig,
    RouteName::MqttConfig,
    RouteName::NtpConfig,
    RouteName::HostnameConfig,
    RouteName::AuthConfig,
];

/// `(href, label)` for every linked route.
pub fn nav_links() -> Vec<(&'static str, &'static str)> {
    NAV_ROUTES
        .into_iter()
        .filter_map(|route| route.path().map(|path| (path, route.title())))
        .collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<CredentialStore>();

    let on_sign_out = move |_| store.sign_out();

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"SBC PDU"</span>
            <Show when=move || auth.get().is_signed_in()>
                <nav class="nav-bar__links">
                    {nav_links()
                        .into_iter()
                        .map(|(href, label)| view! { <A href=href>{label}</A> })
                        .collect_view()}
                </nav>
                <span class="nav-bar__spacer"></span>
                <span class="nav-bar__user">{move || auth.get().username.unwrap_or_default()}</span>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out.clone()>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
