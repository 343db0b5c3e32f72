//! Aggregate statistics shown on the dashboard landing page.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
