//! Hostname configuration page.

#[cfg(test)]
#[path = "hostname_test.rs"]
mod hostname_test;

use console_core::net::api;
use console_core::net::types::HostnameConfig;
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{FormState, LoadState, Notice};

const MAX_LABEL_LEN: usize = 63;

/// Accept a single RFC 1123 label: letters, digits and inner hyphens.
pub fn validate_hostname(raw: &str) -> Result<HostnameConfig, &'static str> {
    let hostname = raw.trim();
    if hostname.is_empty() {
        return Err("Enter a hostname.");
    }
    if hostname.len() > MAX_LABEL_LEN {
        return Err("Hostname must be at most 63 characters.");
    }
    if !hostname.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Hostname may only contain letters, digits and hyphens.");
    }
    if hostname.starts_with('-') || hostname.ends_with('-') {
        return Err("Hostname must not start or end with a hyphen.");
    }
    Ok(HostnameConfig { hostname: hostname.to_owned() })
}

#[component]
pub fn HostnamePage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let hostname = RwSignal::new(String::new());
    let load = RwSignal::new(LoadState::<()>::Loading);
    let form = RwSignal::new(FormState::default());

    let gw_load = gw.clone();
    leptos::task::spawn_local(async move {
        let result = api::get_hostname(&gw_load).await;
        if let Ok(config) = &result {
            hostname.set(config.hostname.clone());
        }
        load.set(LoadState::from_result(result.map(drop)));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let config = match validate_hostname(&hostname.get_untracked()) {
            Ok(config) => config,
            Err(message) => return form.update(|f| f.invalid(message)),
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            let result = api::set_hostname(&gw, &config).await;
            form.update(|f| f.finish(Notice::from_save(&result, "Hostname saved.")));
        });
    };

    view! {
        <section class="page">
            <h1>"Hostname"</h1>
            <Show when=move || load.get().error().is_some()>
                <p class="notice notice--error">{move || load.get().error().map(str::to_owned)}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"Hostname"</span>
                    <input
                        type="text"
                        maxlength="63"
                        disabled=move || load.get().is_loading()
                        prop:value=move || hostname.get()
                        on:input=move |ev| hostname.set(event_target_value(&ev))
                    />
                </label>
                <NoticeBanner notice=Signal::derive(move || form.get().notice)/>
                <button class="btn btn--primary" type="submit" disabled=move || form.get().saving>
                    "Save"
                </button>
            </form>
        </section>
    }
}
