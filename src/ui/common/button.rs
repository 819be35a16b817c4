use leptos::prelude::*;

/// Button colour
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

/// Form submit button
#[component]
pub fn SubmitButton(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button
                type="submit"
                class=format!("btn-base {}", variant.class())
            >
                {children()}
            </button>
        </div>
    }
}
