//! File uploads for evidence attachments.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
