use leptos::prelude::*;

use super::message::ErrorMessage;
use crate::ui::form_handle::FieldBinding;

/// Labelled input bound to a form field, with its error shown beneath
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Binding returned by `FormHandle::register`
    binding: FieldBinding,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let FieldBinding {
        name,
        value,
        on_input,
        error,
    } = binding;
    let input_id = format!("field-{}", name);

    view! {
        <div class="form-field">
            <label class="label" for=input_id.clone()>
                {label}
            </label>
            <input
                id=input_id
                name=name
                type=input_type
                class="input-base"
                class:input-error=move || error.get().is_some()
                autocomplete=autocomplete
                placeholder=placeholder
                aria-invalid=move || error.get().is_some().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <ErrorMessage error=error />
        </div>
    }
}
