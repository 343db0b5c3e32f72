//! Auth feature module covering login, registration, email verification,
//! password recovery, and session hydration. Login and email verification
//! persist the session token as a side effect; every other flow is a plain
//! request/response. Payloads carry credentials and must never be logged.

#[cfg(target_arch = "wasm32")]
pub mod client;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod types;
