//! WiFi station configuration page with an access-point scan.

#[cfg(test)]
#[path = "wifi_test.rs"]
mod wifi_test;

use console_core::net::api;
use console_core::net::types::{WifiAp, WifiAuthMode, WifiConfig};
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{FormState, LoadState, Notice};

const MAX_SSID_BYTES: usize = 32;

/// Check SSID and key against the selected mode's limits.
pub fn validate_wifi(auth_mode: WifiAuthMode, ssid: &str, psk: &str) -> Result<WifiConfig, &'static str> {
    if ssid.is_empty() {
        return Err("Enter the network name (SSID).");
    }
    if ssid.len() > MAX_SSID_BYTES {
        return Err("SSID must be at most 32 bytes.");
    }
    let psk = if auth_mode.requires_psk() { psk } else { "" };
    match auth_mode {
        WifiAuthMode::Open => {}
        WifiAuthMode::Wep => {
            if ![5, 10, 13, 26].contains(&psk.len()) {
                return Err("WEP key must be 5 or 13 characters (10 or 26 hex digits).");
            }
        }
        WifiAuthMode::WpaPersonal
        | WifiAuthMode::Wpa2Personal
        | WifiAuthMode::Wpa3Personal
        | WifiAuthMode::WpaWpa2Personal
        | WifiAuthMode::Wpa2Wpa3Personal => {
            if !(8..=63).contains(&psk.len()) {
                return Err("Pre-shared key must be 8 to 63 characters.");
            }
        }
        WifiAuthMode::Wpa2Enterprise | WifiAuthMode::WapiPsk | WifiAuthMode::Owe | WifiAuthMode::Unknown => {
            return Err("This security mode cannot be configured on the device.");
        }
    }
    Ok(WifiConfig { auth_mode, ssid: ssid.to_owned(), psk: psk.to_owned() })
}

/// Scan results as listed: hidden networks dropped, one entry per SSID
/// (the one in use, else the strongest), in-use first then by signal.
pub fn visible_networks(scan: Vec<WifiAp>) -> Vec<WifiAp> {
    let mut best: Vec<WifiAp> = Vec::new();
    for ap in scan.into_iter().filter(|ap| !ap.ssid.is_empty()) {
        match best.iter_mut().find(|b| b.ssid == ap.ssid) {
            Some(existing) => {
                if (ap.in_use, ap.rssi) > (existing.in_use, existing.rssi) {
                    *existing = ap;
                }
            }
            None => best.push(ap),
        }
    }
    best.sort_by(|a, b| b.in_use.cmp(&a.in_use).then(b.rssi.cmp(&a.rssi)));
    best
}

/// Rough link quality from RSSI: -100 dBm is 0 %, -50 dBm and up is 100 %.
pub fn signal_quality(rssi: i32) -> u8 {
    let quality = (rssi.clamp(-100, -50) + 100) * 2;
    u8::try_from(quality).unwrap_or(0)
}

#[component]
pub fn WifiPage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let auth_mode = RwSignal::new(WifiAuthMode::default());
    let ssid = RwSignal::new(String::new());
    let psk = RwSignal::new(String::new());
    let load = RwSignal::new(LoadState::<()>::Loading);
    let form = RwSignal::new(FormState::default());
    let scan = RwSignal::new(None::<LoadState<Vec<WifiAp>>>);

    let gw_load = gw.clone();
    leptos::task::spawn_local(async move {
        let result = api::get_wifi(&gw_load).await;
        if let Ok(config) = &result {
            auth_mode.set(config.auth_mode);
            ssid.set(config.ssid.clone());
            psk.set(config.psk.clone());
        }
        load.set(LoadState::from_result(result.map(drop)));
    });

    let gw_submit = gw.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let config = match validate_wifi(auth_mode.get_untracked(), &ssid.get_untracked(), &psk.get_untracked()) {
            Ok(config) => config,
            Err(message) => return form.update(|f| f.invalid(message)),
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let gw = gw_submit.clone();
        leptos::task::spawn_local(async move {
            let result = api::set_wifi(&gw, &config).await;
            form.update(|f| f.finish(Notice::from_save(&result, "WiFi settings saved. The device is reconnecting.")));
        });
    };

    let on_scan = move |_| {
        if matches!(scan.get_untracked(), Some(LoadState::Loading)) {
            return;
        }
        scan.set(Some(LoadState::Loading));
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            let result = api::scan_wifi(&gw).await.map(visible_networks);
            scan.set(Some(LoadState::from_result(result)));
        });
    };

    let on_pick = Callback::new(move |ap: WifiAp| {
        if ap.auth_mode.is_configurable() {
            auth_mode.set(ap.auth_mode);
        }
        ssid.set(ap.ssid);
        psk.set(String::new());
    });

    let on_mode = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<WifiAuthMode>() {
        Ok(mode) => auth_mode.set(mode),
        Err(e) => log::warn!("{e}"),
    };

    let disabled = move || load.get().is_loading();

    view! {
        <section class="page">
            <h1>"WiFi"</h1>
            <Show when=move || load.get().error().is_some()>
                <p class="notice notice--error">{move || load.get().error().map(str::to_owned)}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="field">
                    <span>"Authentication"</span>
                    <select disabled=disabled prop:value=move || auth_mode.get().as_str() on:change=on_mode>
                        {WifiAuthMode::ALL
                            .into_iter()
                            .map(|mode| view! { <option value=mode.as_str()>{mode.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"SSID"</span>
                    <input
                        type="text"
                        disabled=disabled
                        prop:value=move || ssid.get()
                        on:input=move |ev| ssid.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || auth_mode.get().requires_psk()>
                    <label class="field">
                        <span>"Pre-shared key"</span>
                        <input
                            type="password"
                            disabled=disabled
                            prop:value=move || psk.get()
                            on:input=move |ev| psk.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <NoticeBanner notice=Signal::derive(move || form.get().notice)/>
                <button class="btn btn--primary" type="submit" disabled=move || form.get().saving>
                    "Save"
                </button>
            </form>

            <section class="scan">
                <header class="page__header">
                    <h2>"Nearby networks"</h2>
                    <button
                        class="btn"
                        on:click=on_scan
                        disabled=move || matches!(scan.get(), Some(LoadState::Loading))
                    >
                        "Scan"
                    </button>
                </header>
                {move || match scan.get() {
                    None => ().into_any(),
                    Some(LoadState::Loading) => view! { <p class="page__status">"Scanning..."</p> }.into_any(),
                    Some(LoadState::Failed(message)) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                    Some(LoadState::Ready(networks)) => view! {
                        <ul class="scan__list">
                            {networks.into_iter().map(|ap| network_row(ap, on_pick)).collect_view()}
                        </ul>
                    }
                        .into_any(),
                }}
            </section>
        </section>
    }
}

fn network_row(ap: WifiAp, on_pick: Callback<WifiAp>) -> impl IntoView {
    let quality = format!("{} %", signal_quality(ap.rssi));
    let label = ap.ssid.clone();
    let mode = ap.auth_mode.as_str();
    let class = if ap.in_use { "scan__item scan__item--active" } else { "scan__item" };
    view! {
        <li class=class>
            <button class="btn btn--link" on:click=move |_| on_pick.run(ap.clone())>
                {label}
            </button>
            <span class="scan__mode">{mode}</span>
            <span class="scan__signal">{quality}</span>
        </li>
    }
}
