//! Application pages module
//!
//! - Authentication page (home)
//! - Not found page

mod auth;
mod not_found;

pub use auth::AuthPage;
pub use not_found::NotFoundPage;
