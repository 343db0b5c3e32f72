//! Shared frontend utilities for API access, configuration, errors, and the
//! persisted session.
//!
//! ## Session Lifecycle
//!
//! 1. **Login / email verification:** On a successful response carrying a
//!    token, the client persists one atomic session record (token plus user)
//!    to local storage before returning to the caller.
//! 2. **Hydration:** `AuthProvider` reads the persisted record once on mount
//!    and exposes it through signals for guards and routes.
//! 3. **Logout:** The record is cleared in a single operation; no network
//!    call is made.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in routes and features. The token is an opaque
//! bearer credential; callers must avoid logging it.

pub mod api;
pub mod config;
pub mod errors;
pub mod session;

pub const GIT_COMMIT_HASH: &str = env!("BLOTTER_WEB_GIT_SHA");

#[cfg(target_arch = "wasm32")]
pub use api::{
    delete_json, get_json, patch_json, post_json, post_multipart, put_json,
};
pub use errors::AppError;
