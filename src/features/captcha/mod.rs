//! Slider verification challenge: a pure drag state machine plus the Leptos
//! component that renders it. The verdict is client-local; login and signup
//! forward it to the API as an opaque flag.

pub mod model;
#[cfg(target_arch = "wasm32")]
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub use widget::SliderCaptcha;
