//! Scheduled hearings tied to blotter reports.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
