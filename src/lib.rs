//! Browser frontend for the Blotter case-management API.
//!
//! The crate splits into a target-independent core and a wasm32-only shell.
//! The core (API URL handling, error types, configuration, the persisted
//! session record, and the slider-verification state machine) compiles and
//! tests natively. Everything that touches the DOM, `fetch`, or local
//! storage is gated behind `target_arch = "wasm32"`.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod routes;
