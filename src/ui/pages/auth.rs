//! Authentication page, served at `/`

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::AuthView;

/// Authentication page component
#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <Title text="Sign in"/>
        <main>
            <AuthView/>
        </main>
    }
}
