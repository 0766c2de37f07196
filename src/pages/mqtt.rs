//! MQTT broker configuration page.

#[cfg(test)]
#[path = "mqtt_test.rs"]
mod mqtt_test;

use console_core::net::api;
use console_core::net::types::MqttConfig;
use leptos::prelude::*;
use url::Url;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{FormState, LoadState, Notice};

/// URI schemes the firmware's MQTT client can connect with.
pub const MQTT_SCHEMES: [&str; 4] = ["mqtt", "mqtts", "ws", "wss"];

/// Require a broker URI with a supported scheme and a host. Credentials are
/// optional and passed through as typed.
pub fn validate_mqtt(uri: &str, username: &str, password: &str) -> Result<MqttConfig, &'static str> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err("Enter the broker URI.");
    }
    let parsed = Url::parse(uri).map_err(|_| "Broker URI is not a valid URI.")?;
    if !MQTT_SCHEMES.contains(&parsed.scheme()) {
        return Err("Broker URI must start with mqtt://, mqtts://, ws:// or wss://.");
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err("Broker URI must name a host.");
    }
    Ok(MqttConfig { uri: uri.to_owned(), username: username.trim().to_owned(), password: password.to_owned() })
}

#[component]
pub fn MqttPage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let uri = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let load = RwSignal::new(LoadState::<()>::Loading);
    let form = RwSignal::new(FormState::default());

    let gw_load = gw.clone();
    leptos::task::spawn_local(async move {
        let result = api::get_mqtt(&gw_load).await;
        if let Ok(config) = &result {
            uri.set(config.uri.clone());
            username.set(config.username.clone());
            password.set(config.password.clone());
        }
        load.set(LoadState::from_result(result.map(drop)));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let config = match validate_mqtt(&uri.get_untracked(), &username.get_untracked(), &password.get_untracked()) {
            Ok(config) => config,
            Err(message) => return form.update(|f| f.invalid(message)),
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            let result = api::set_mqtt(&gw, &config).await;
            form.update(|f| f.finish(Notice::from_save(&result, "MQTT settings saved.")));
        });
    };

    let disabled = move || load.get().is_loading();

    view! {
        <section class="page">
            <h1>"MQTT"</h1>
            <Show when=move || load.get().error().is_some()>
                <p class="notice notice--error">{move || load.get().error().map(str::to_owned)}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"Broker URI"</span>
                    <input
                        type="text"
                        placeholder="mqtt://broker.local:1883"
                        disabled=disabled
                        prop:value=move || uri.get()
                        on:input=move |ev| uri.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Username"</span>
                    <input
                        type="text"
                        disabled=disabled
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        disabled=disabled
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
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
