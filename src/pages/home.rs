//! Home page: switched power outputs with live readings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It lists outputs on mount and after
//! every switch, so the table always reflects what the device reports
//! rather than the requested state.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use console_core::net::api;
use console_core::net::types::Output;
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::browser::ConsoleGateway;
use crate::state::page::{LoadState, Notice};
use crate::util::errors::describe_error;
use crate::util::format::{format_amperes, format_volts, format_watts};

pub fn output_label(output: &Output) -> String {
    format!("Output {}", output.index)
}

/// `(css modifier, label)` for an output's state. An alert wins over on/off.
pub fn output_status(output: &Output) -> (&'static str, &'static str) {
    if output.alert {
        ("output--alert", "Alert")
    } else if output.enabled {
        ("output--on", "On")
    } else {
        ("output--off", "Off")
    }
}

/// Combined draw of all outputs, in watts.
pub fn total_power(outputs: &[Output]) -> f64 {
    outputs.iter().map(Output::power).sum()
}

fn reload(gw: ConsoleGateway, outputs: RwSignal<LoadState<Vec<Output>>>) {
    leptos::task::spawn_local(async move {
        let result = api::list_outputs(&gw).await;
        outputs.set(LoadState::from_result(result));
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let gw = expect_context::<ConsoleGateway>();
    let outputs = RwSignal::new(LoadState::<Vec<Output>>::Loading);
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(None::<u32>);

    reload(gw.clone(), outputs);

    let gw_refresh = gw.clone();
    let on_refresh = move |_| reload(gw_refresh.clone(), outputs);

    let on_switch = Callback::new(move |(index, state): (u32, bool)| {
        if busy.get_untracked().is_some() {
            return;
        }
        busy.set(Some(index));
        notice.set(None);
        let gw = gw.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::switch_output(&gw, index, state).await {
                notice.set(Some(Notice::error(describe_error(&e))));
            }
            busy.set(None);
            reload(gw, outputs);
        });
    });

    view! {
        <section class="page">
            <header class="page__header">
                <h1>"Outputs"</h1>
                <button class="btn" on:click=on_refresh>"Refresh"</button>
            </header>
            <NoticeBanner notice=notice/>
            {move || match outputs.get() {
                LoadState::Loading => view! { <p class="page__status">"Loading outputs..."</p> }.into_any(),
                LoadState::Failed(message) => view! { <p class="notice notice--error">{message}</p> }.into_any(),
                LoadState::Ready(list) => {
                    let total = format_watts(total_power(&list));
                    view! {
                        <table class="outputs">
                            <thead>
                                <tr>
                                    <th>"Output"</th>
                                    <th>"State"</th>
                                    <th>"Voltage"</th>
                                    <th>"Current"</th>
                                    <th>"Power"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|output| output_row(output, busy, on_switch)).collect_view()}
                            </tbody>
                        </table>
                        <p class="outputs__total">"Total: " {total}</p>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn output_row(output: Output, busy: RwSignal<Option<u32>>, on_switch: Callback<(u32, bool)>) -> impl IntoView {
    let (status_class, status_label) = output_status(&output);
    let index = output.index;
    let next_state = !output.enabled;
    let action = if output.enabled { "Turn off" } else { "Turn on" };
    view! {
        <tr class=status_class>
            <td>{output_label(&output)}</td>
            <td>{status_label}</td>
            <td>{format_volts(output.voltage)}</td>
            <td>{format_amperes(output.current)}</td>
            <td>{format_watts(output.power())}</td>
            <td>
                <button
                    class="btn"
                    disabled=move || busy.get().is_some()
                    on:click=move |_| on_switch.run((index, next_state))
                >
                    {action}
                </button>
            </td>
        </tr>
    }
}
