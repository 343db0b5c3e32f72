//! Blotter reports: the core case records of the application.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
