//! Device credential change page.
//!
//! After the device accepts the new pair the session switches to it, since
//! the old password stops working for every later request.

#[cfg(test)]
#[path = "auth_config_test.rs"]
mod auth_config_test;

use console_core::net::api;
use console_core::net::types::AuthConfig;
use console_core::state::auth::{CredentialStore, Credentials};
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{FormState, Notice};

/// Form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub fn validate_auth_change(form: &AuthForm) -> Result<AuthConfig, &'static str> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err("Enter a username.");
    }
    if form.old_password.is_empty() {
        return Err("Enter the current password.");
    }
    if form.new_password.is_empty() {
        return Err("Enter a new password.");
    }
    if form.new_password != form.confirm_password {
        return Err("The new passwords do not match.");
    }
    Ok(AuthConfig {
        username: username.to_owned(),
        old_password: form.old_password.clone(),
        new_password: form.new_password.clone(),
    })
}

#[component]
pub fn AuthConfigPage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let store = expect_context::<CredentialStore>();
    let fields = RwSignal::new(AuthForm { username: store.username().unwrap_or_default(), ..AuthForm::default() });
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let config = match validate_auth_change(&fields.get_untracked()) {
            Ok(config) => config,
            Err(message) => return form.update(|f| f.invalid(message)),
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let gw = gw.clone();
        let store = store.clone();
        leptos::task::spawn_local(async move {
            let result = api::update_credentials(&gw, &config).await;
            if result.is_ok() {
                store.set_credentials(Credentials::new(config.username, config.new_password));
                fields.update(|f| {
                    f.old_password.clear();
                    f.new_password.clear();
                    f.confirm_password.clear();
                });
            }
            form.update(|f| f.finish(Notice::from_save(&result, "Credentials changed.")));
        });
    };

    view! {
        <section class="page">
            <h1>"Credentials"</h1>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || fields.get().username
                        on:input=move |ev| fields.update(|f| f.username = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Current password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || fields.get().old_password
                        on:input=move |ev| fields.update(|f| f.old_password = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"New password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || fields.get().new_password
                        on:input=move |ev| fields.update(|f| f.new_password = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Confirm new password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || fields.get().confirm_password
                        on:input=move |ev| fields.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
                <NoticeBanner notice=Signal::derive(move || form.get().notice)/>
                <button class="btn btn--primary" type="submit" disabled=move || form.get().saving>
                    "Change"
                </button>
            </form>
        </section>
    }
}
