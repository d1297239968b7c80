//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod dashboard;

pub use chat::Chat;
pub use dashboard::Dashboard;
