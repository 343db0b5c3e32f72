//! In-app notifications with a read/unread flag.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;
