//! Flames Blue Analytics
//!
//! Single-page analytics dashboard and chat frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - KPI cards, line/donut/bar charts, and a paginated signup table
//! - Request/response chat with optimistic sends and a persisted transcript
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data comes from an external backend over two JSON
//! endpoints; the chat transcript is mirrored into local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
