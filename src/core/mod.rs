//! Form state, validation schemas and tab selection for the authentication view

#[cfg(feature = "ssr")]
pub mod config;
mod credentials;
mod form;
mod submit;
mod tabs;
#[cfg(test)]
mod tests;
pub mod validation;

pub use credentials::*;
pub use form::{FormError, FormModel, SubmitState};
pub use submit::{Diagnostic, DiagnosticLog, SubmitHandler, diagnostic_line};
pub use tabs::{AuthTab, TabSelector, UnknownTab};
pub use validation::{FieldErrors, FieldValidationError};
