//! Login form component
//!
//! Email and password, validated on submit against the login schema.

use leptos::prelude::*;

use crate::core::{AuthTab, LoginCredentials, SubmitHandler, fields};
use crate::ui::common::{ButtonVariant, FormField, SubmitButton};
use crate::ui::form_handle::FormHandle;

/// Login form component
#[component]
pub fn LoginForm<H>(
    /// Form state, owned by the enclosing view so it outlives tab switches
    form: FormHandle<LoginCredentials>,
    /// Receives the credentials once they validate
    handler: H,
) -> impl IntoView
where
    H: SubmitHandler<LoginCredentials> + Send + Sync + 'static,
{
    let email = form.register(fields::EMAIL);
    let password = form.register(fields::PASSWORD);
    let tab = AuthTab::Login;

    view! {
        <h2 class="auth-heading">{tab.heading()}</h2>
        <form on:submit=form.on_submit(handler) novalidate=true class="auth-form">
            <FormField
                label="Email"
                binding=email
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
            />
            <FormField
                label="Password"
                binding=password
                input_type="password"
                autocomplete="current-password"
            />
            <SubmitButton variant=ButtonVariant::Primary>
                {tab.submit_label()}
            </SubmitButton>
        </form>
    }
}
