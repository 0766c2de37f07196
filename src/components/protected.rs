//! Wrapper that renders protected content only for a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard runs as an effect after the location changes, so a
//! protected page would otherwise mount (and fire its requests) for one
//! frame before the redirect lands.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show
            when=move || auth.get().is_signed_in()
            fallback=|| view! { <p class="page__status">"Redirecting to sign in..."</p> }
        >
            {children()}
        </Show>
    }
}
