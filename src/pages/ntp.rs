//! NTP servers and timezone page.

#[cfg(test)]
#[path = "ntp_test.rs"]
mod ntp_test;

use console_core::net::api;
use console_core::net::types::{NtpConfig, NtpTimezone};
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{FormState, LoadState, Notice};

/// Split the servers text area on newlines and commas, dropping blanks and
/// repeats while keeping first-seen order.
pub fn parse_servers(text: &str) -> Vec<String> {
    let mut servers: Vec<String> = Vec::new();
    for server in text.split(['\n', ',']).map(str::trim).filter(|s| !s.is_empty()) {
        if !servers.iter().any(|s| s.eq_ignore_ascii_case(server)) {
            servers.push(server.to_owned());
        }
    }
    servers
}

pub fn format_servers(servers: &[String]) -> String {
    servers.join("\n")
}

pub fn validate_ntp(servers_text: &str, timezone: NtpTimezone) -> Result<NtpConfig, &'static str> {
    let servers = parse_servers(servers_text);
    if servers.is_empty() {
        return Err("Enter at least one NTP server.");
    }
    if servers.iter().any(|s| s.contains(char::is_whitespace)) {
        return Err("Server names must not contain spaces.");
    }
    Ok(NtpConfig { servers, timezone })
}

#[component]
pub fn NtpPage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let servers = RwSignal::new(String::new());
    let timezone = RwSignal::new(NtpTimezone::default());
    let load = RwSignal::new(LoadState::<()>::Loading);
    let form = RwSignal::new(FormState::default());

    let gw_load = gw.clone();
    leptos::task::spawn_local(async move {
        let result = api::get_ntp(&gw_load).await;
        if let Ok(config) = &result {
            servers.set(format_servers(&config.servers));
            timezone.set(config.timezone);
        }
        load.set(LoadState::from_result(result.map(drop)));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let config = match validate_ntp(&servers.get_untracked(), timezone.get_untracked()) {
            Ok(config) => config,
            Err(message) => return form.update(|f| f.invalid(message)),
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        servers.set(format_servers(&config.servers));
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            let result = api::set_ntp(&gw, &config).await;
            form.update(|f| f.finish(Notice::from_save(&result, "NTP settings saved.")));
        });
    };

    let on_timezone = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<NtpTimezone>() {
        Ok(tz) => timezone.set(tz),
        Err(e) => log::warn!("{e}"),
    };

    view! {
        <section class="page">
            <h1>"NTP"</h1>
            <Show when=move || load.get().error().is_some()>
                <p class="notice notice--error">{move || load.get().error().map(str::to_owned)}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"Servers (one per line)"</span>
                    <textarea
                        rows="4"
                        disabled=move || load.get().is_loading()
                        prop:value=move || servers.get()
                        on:input=move |ev| servers.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span>"Timezone"</span>
                    <select
                        disabled=move || load.get().is_loading()
                        prop:value=move || timezone.get().as_str()
                        on:change=on_timezone
                    >
                        {NtpTimezone::ALL
                            .into_iter()
                            .map(|tz| view! { <option value=tz.as_str()>{tz.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <NoticeBanner notice=Signal::derive(move || form.get().notice)/>
                <button class="btn btn--primary" type="submit" disabled=move || form.get().saving>
                    "Save"
                </button>
            </form>
        </section>
    }
}
