//! Inline notice banner for form outcomes.

use leptos::prelude::*;

use crate::state::page::Notice;

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = n.css_class();
            view! { <p class=class role="status">{n.text}</p> }
        })
    }
}
