//! Officer directory: read-only roster data.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
