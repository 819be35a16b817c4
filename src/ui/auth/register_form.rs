//! Register form component
//!
//! Name, email and password; the password must be at least six characters.

use leptos::prelude::*;

use crate::core::{AuthTab, RegistrationDetails, SubmitHandler, fields};
use crate::ui::common::{ButtonVariant, FormField, SubmitButton};
use crate::ui::form_handle::FormHandle;

/// Register form component
#[component]
pub fn RegisterForm<H>(
    /// Form state, owned by the enclosing view so it outlives tab switches
    form: FormHandle<RegistrationDetails>,
    /// Receives the details once they validate
    handler: H,
) -> impl IntoView
where
    H: SubmitHandler<RegistrationDetails> + Send + Sync + 'static,
{
    let name = form.register(fields::NAME);
    let email = form.register(fields::EMAIL);
    let password = form.register(fields::PASSWORD);
    let tab = AuthTab::Register;

    view! {
        <h2 class="auth-heading">{tab.heading()}</h2>
        <form on:submit=form.on_submit(handler) novalidate=true class="auth-form">
            <FormField label="Name" binding=name autocomplete="name" />
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
                autocomplete="new-password"
            />
            <SubmitButton variant=ButtonVariant::Secondary>
                {tab.submit_label()}
            </SubmitButton>
        </form>
    }
}
