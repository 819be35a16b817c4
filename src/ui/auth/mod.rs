//! Authentication UI module
//!
//! The tabbed view and the two forms it switches between.

mod auth_view;
mod login_form;
mod register_form;

pub use auth_view::AuthView;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
