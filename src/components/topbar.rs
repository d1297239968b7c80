//! Topbar Component
//!
//! Sticky header: route-derived title, date-range dropdown, export button,
//! theme toggle, and avatar.

use leptos::*;
use leptos_router::use_location;

use crate::state::global::{GlobalState, Theme};

/// Sticky page header
#[component]
pub fn Topbar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let pathname = use_location().pathname;

    let title = move || {
        if pathname.get().starts_with("/chat") {
            ("Chat", "Ask questions & get insights")
        } else {
            ("Dashboard", "Overview & insights")
        }
    };

    view! {
        <header class="topbar">
            <div>
                <h1 class="topbar-title">{move || title().0}</h1>
                <p class="topbar-sub">{move || title().1}</p>
            </div>

            <div class="topbar-actions">
                <DateRange />
                <button class="export-button">"⬇ Export"</button>
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| state.toggle_theme()
                >
                    {move || {
                        match state.theme.get() {
                            Theme::Light => "🌙",
                            Theme::Dark => "☀",
                        }
                    }}
                </button>
                <div class="avatar">"U"</div>
            </div>
        </header>
    }
}

/// Date range dropdown (view state only)
#[component]
fn DateRange() -> impl IntoView {
    const OPTIONS: [&str; 3] = ["Last 7 days", "Last 30 days", "Last 90 days"];

    let (open, set_open) = create_signal(false);
    let (range, set_range) = create_signal(OPTIONS[1]);

    view! {
        <div class="date-range">
            <button class="date-range-button" on:click=move |_| set_open.update(|o| *o = !*o)>
                "📅 "
                {move || range.get()}
            </button>

            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="date-range-menu">
                                {OPTIONS
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if range.get() == option {
                                                        "date-range-option selected"
                                                    } else {
                                                        "date-range-option"
                                                    }
                                                }
                                                on:click=move |_| {
                                                    set_range.set(option);
                                                    set_open.set(false);
                                                }
                                            >
                                                {option}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
