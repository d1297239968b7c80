//! Sidebar Component
//!
//! Collapsible navigation rail: brand block, route links with an active
//! highlight, and the profile/logout card.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Sidebar navigation rail
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let collapsed = state.sidebar_collapsed;

    view! {
        <aside class=move || {
            if collapsed.get() { "sidebar sidebar-collapsed" } else { "sidebar" }
        }>
            <div class="sidebar-head">
                <div class="brand">
                    <div class="brand-logo">"FB"</div>
                    {move || {
                        (!collapsed.get())
                            .then(|| {
                                view! {
                                    <div>
                                        <div class="brand-name">"Flames Blue"</div>
                                        <div class="brand-sub">"Analytics"</div>
                                    </div>
                                }
                            })
                    }}
                </div>
                <button
                    class="collapse-toggle"
                    aria-label="Collapse sidebar"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "›" } else { "‹" }}
                </button>
            </div>

            <nav class="sidebar-nav">
                <NavItem href="/dashboard" icon="🏠" label="Home" />
                <NavItem href="/chat" icon="💬" label="Chat" />
                <NavItem href="/settings" icon="⚙" label="Settings" />
                <NavItem href="/profile" icon="👤" label="Profile" />
            </nav>

            <div class="sidebar-foot">
                <div class="profile-card">
                    {move || {
                        (!collapsed.get())
                            .then(|| view! { <div class="profile-title">"Profile"</div> })
                    }}
                    <button class="logout-button">
                        "⎋ "
                        {move || (!collapsed.get()).then(|| "Logout")}
                    </button>
                </div>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavItem(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let collapsed = state.sidebar_collapsed;

    view! {
        <A href=href class="nav-item" active_class="nav-item-active">
            <span class="nav-icon">{icon}</span>
            {move || (!collapsed.get()).then(|| view! { <span>{label}</span> })}
        </A>
    }
}
