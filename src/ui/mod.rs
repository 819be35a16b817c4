pub mod auth;
pub mod common;
pub mod form_handle;
pub mod icon;
pub mod pages;

pub use auth::AuthView;
pub use form_handle::{FieldBinding, FormHandle, use_form};
pub use icon::{Icon, icons};
