use leptos::prelude::*;

/// Tab strip; tabs are identified by their position
#[component]
pub fn Tabs(
    /// Tab labels, in display order
    labels: Vec<&'static str>,
    /// Index of the active tab
    #[prop(into)]
    selected: Signal<usize>,
    /// Callback with the index of the clicked tab
    on_change: Callback<usize>,
    /// Whether tabs are centered in their container
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let tabs_class = if centered {
        "tabs-list tabs-centered"
    } else {
        "tabs-list"
    };

    view! {
        <div class="tabs-container">
            <div class=tabs_class role="tablist">
                {labels.into_iter().enumerate().map(|(index, label)| {
                    let is_active = Signal::derive(move || selected.get() == index);

                    let tab_class = move || {
                        if is_active.get() {
                            "tab-item tab-active"
                        } else {
                            "tab-item"
                        }
                    };

                    view! {
                        <button
                            type="button"
                            id=format!("tab-{}", index)
                            class=tab_class
                            on:click=move |_| {
                                if !is_active.get_untracked() {
                                    on_change.run(index);
                                }
                            }
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            aria-controls=format!("panel-{}", index)
                        >
                            <span class="tab-label">{label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Content for the tab at `index`
#[component]
pub fn TabPanel(
    /// Index of the tab this panel belongs to
    index: usize,
    /// Panel content
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="tab-panel"
            role="tabpanel"
            id=format!("panel-{}", index)
            aria-labelledby=format!("tab-{}", index)
        >
            {children()}
        </div>
    }
}
