//! Backend API
//!
//! HTTP client for the two Flames Blue backend endpoints.

pub mod client;

pub use client::*;
