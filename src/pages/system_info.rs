//! System information page with the restart action.

#[cfg(test)]
#[path = "system_info_test.rs"]
mod system_info_test;

use console_core::net::api;
use console_core::net::types::{ChipInfo, HeapInfo, NetworkInterface, SystemInfo};
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{LoadState, Notice};
use crate::util::errors::describe_error;
use crate::util::format::{format_bytes, format_uptime, percent};

pub fn chip_summary(chip: &ChipInfo) -> String {
    let cores = if chip.cores == 1 { "core" } else { "cores" };
    format!("{} rev. {}, {} {cores}", chip.model, chip.revision, chip.cores)
}

pub fn heap_summary(heap: &HeapInfo) -> String {
    format!(
        "{} used of {} ({} %)",
        format_bytes(heap.used()),
        format_bytes(heap.total),
        percent(heap.used(), heap.total)
    )
}

/// `(label, value)` rows describing one interface. Fields the device left
/// empty are skipped.
pub fn interface_rows(iface: &NetworkInterface) -> Vec<(&'static str, String)> {
    let mut rows = vec![("State", if iface.is_up { "up" } else { "down" }.to_owned())];
    let optional = [
        ("MAC address", &iface.mac_address),
        ("Hostname", &iface.hostname),
        ("IPv4 address", &iface.ipv4.address),
        ("IPv4 netmask", &iface.ipv4.netmask),
        ("IPv4 gateway", &iface.ipv4.gateway),
    ];
    rows.extend(optional.into_iter().filter(|(_, value)| !value.is_empty()).map(|(label, value)| (label, value.clone())));
    if !iface.ipv6.addresses.is_empty() {
        rows.push(("IPv6 addresses", iface.ipv6.addresses.join(", ")));
    }
    if !iface.dns.is_empty() {
        rows.push(("DNS servers", iface.dns.join(", ")));
    }
    rows
}

fn confirm_restart() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Restart the device now?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

#[component]
pub fn SystemInfoPage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let info = RwSignal::new(LoadState::<SystemInfo>::Loading);
    let notice = RwSignal::new(None::<Notice>);
    let restarting = RwSignal::new(false);

    let gw_load = gw.clone();
    leptos::task::spawn_local(async move {
        info.set(LoadState::from_result(api::system_info(&gw_load).await));
    });

    let on_restart = move |_| {
        if restarting.get_untracked() || !confirm_restart() {
            return;
        }
        restarting.set(true);
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            match api::restart(&gw).await {
                Ok(()) => notice.set(Some(Notice::success("The device is restarting."))),
                Err(e) => {
                    notice.set(Some(Notice::error(describe_error(&e))));
                    restarting.set(false);
                }
            }
        });
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"System information"</h1>
                <button class="btn btn--danger" on:click=on_restart disabled=move || restarting.get()>
                    "Restart"
                </button>
            </header>
            <NoticeBanner notice=notice/>
            {move || match info.get() {
                LoadState::Loading => view! { <p class="page__status">"Loading..."</p> }.into_any(),
                LoadState::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                LoadState::Ready(info) => system_view(info).into_any(),
            }}
        </section>
    }
}

fn system_view(info: SystemInfo) -> impl IntoView {
    let summary = vec![
        ("Firmware", info.version.clone()),
        ("ESP-IDF", info.idf_version.clone()),
        ("Chip", chip_summary(&info.chip)),
        ("Uptime", format_uptime(info.uptime)),
        ("Heap", heap_summary(&info.heap)),
    ];
    view! {
        {rows_table(summary)}
        {info
            .network
            .into_iter()
            .map(|iface| {
                let rows = interface_rows(&iface);
                view! {
                    <h2>"Interface " {iface.name}</h2>
                    {rows_table(rows)}
                }
            })
            .collect_view()}
    }
}

fn rows_table(rows: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <table class="info-table">
            <tbody>
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <tr>
                            <th>{label}</th>
                            <td>{value}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
