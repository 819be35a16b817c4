//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-text">
                "The page you're looking for doesn't exist."
            </p>
            <A href="/" attr:class="btn-base btn-primary">
                "Back to sign in"
            </A>
        </div>
    }
}
