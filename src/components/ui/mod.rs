pub mod alert;
pub mod button;
pub mod spinner;

pub use alert::{Alert, AlertKind};
pub use button::Button;
pub use spinner::Spinner;
