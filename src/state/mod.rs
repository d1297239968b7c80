//! State Management
//!
//! Global application state and the chat transcript core.

pub mod chat;
pub mod global;

pub use chat::{Message, Role, SendStatus, Transcript};
pub use global::{provide_global_state, GlobalState, Theme};
