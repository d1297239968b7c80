//! Global Application State
//!
//! Reactive state shared across the shell: theme, sidebar collapse, and the
//! transient notice shown under the chat composer.

use leptos::*;

/// Application-wide color theme, carried as explicit state rather than a
/// document-level class mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Class applied to the shell root
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current color theme
    pub theme: RwSignal<Theme>,
    /// Sidebar collapsed to icon-only width
    pub sidebar_collapsed: RwSignal<bool>,
    /// Transient status notice (chat send progress / failure)
    pub notice: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        theme: create_rw_signal(Theme::Light),
        sidebar_collapsed: create_rw_signal(false),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    /// Set a sticky notice, cleared explicitly by the caller
    pub fn set_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));
    }

    pub fn clear_notice(&self) {
        self.notice.set(None);
    }

    /// Show a notice that auto-clears after a timeout
    pub fn show_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));

        let notice = self.notice;
        gloo_timers::callback::Timeout::new(5000, move || {
            notice.try_set(None);
        })
        .forget();
    }
}
