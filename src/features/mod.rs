//! Domain-level frontend features and their shared logic. Routes import
//! these modules to keep view code focused while API handling and the
//! verification state machine live in dedicated feature areas.

pub mod auth;
pub mod captcha;
pub mod dashboard;
pub mod hearings;
pub mod notifications;
pub mod officers;
pub mod reports;
pub mod uploads;
