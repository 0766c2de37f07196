//! Sign-in page: verifies the pair against the device before storing it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page never navigates by itself. A successful sign-in publishes
//! `SignedIn`, and the shell's session listener applies the guard's
//! sign-in exit (the carried `redirect`, or home).

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use console_core::state::auth::{CredentialStore, Credentials};
use leptos::prelude::*;

use crate::net::browser::ConsoleGateway;
use crate::state::auth::AuthState;
use crate::util::errors::describe_sign_in_error;

/// Trim the username and require both fields. The password is kept as typed.
pub fn validate_sign_in(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter username and password.");
    }
    Ok(Credentials::new(username, password))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let store = expect_context::<CredentialStore>();
    let gw = expect_context::<ConsoleGateway>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().pending {
            return;
        }
        let credentials = match validate_sign_in(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        auth.update(|a| a.pending = true);

        let store = store.clone();
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = store.sign_in(&gw, credentials).await {
                log::warn!("sign-in rejected: {e}");
                error.set(Some(describe_sign_in_error(&e)));
                password.set(String::new());
                auth.update(|a| a.pending = false);
            }
        });
    };

    view! {
        <div class="sign-in-page">
            <form class="sign-in-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="notice notice--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || auth.get().pending>
                    {move || if auth.get().pending { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
