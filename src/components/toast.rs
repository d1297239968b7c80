//! Notice Toast Component
//!
//! Transient status strip for the chat composer ("Generating response…",
//! send failures). Dismissible by click; timed notices clear themselves via
//! the global state helpers.

use leptos::*;

use crate::state::global::GlobalState;

/// Transient notice strip driven by the global notice signal
#[component]
pub fn NoticeToast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state
                .notice
                .get()
                .map(|message| {
                    view! {
                        <div
                            class="notice-toast"
                            role="status"
                            on:click=move |_| state.clear_notice()
                        >
                            {message}
                        </div>
                    }
                })
        }}
    }
}
