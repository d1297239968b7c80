//! App Root Component
//!
//! Shell layout, routing, and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Sidebar, Topbar};
use crate::pages::{Chat, Dashboard};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Router>
            <div class=move || format!("app-shell {}", state.theme.get().class())>
                <Sidebar />

                <main class="app-main">
                    <Topbar />

                    <div class="app-content">
                        <Routes>
                            <Route path="/" view=|| view! { <Redirect path="/dashboard" /> } />
                            <Route path="/dashboard" view=Dashboard />
                            <Route path="/chat" view=Chat />
                            <Route
                                path="/*any"
                                view=|| view! { <Redirect path="/dashboard" /> }
                            />
                        </Routes>
                    </div>
                </main>
            </div>
        </Router>
    }
}
