//! Common reusable UI components
//!
//! Building blocks shared by the login and registration forms.

pub mod button;
pub mod form;
pub mod message;
pub mod tabs;

pub use button::{ButtonVariant, SubmitButton};
pub use form::FormField;
pub use message::ErrorMessage;
pub use tabs::{TabPanel, Tabs};
