//! Tabbed login / create-account view

use leptos::prelude::*;

use super::{LoginForm, RegisterForm};
use crate::core::{AuthTab, DiagnosticLog, LoginCredentials, RegistrationDetails, TabSelector};
use crate::ui::common::{TabPanel, Tabs};
use crate::ui::form_handle::use_form;

/// Authentication view with one independent form per tab
///
/// Both forms are created here rather than inside the tab panels, so each
/// keeps its own values while the other tab is shown.
#[component]
pub fn AuthView() -> impl IntoView {
    let selector = RwSignal::new(TabSelector::new());
    let login = use_form::<LoginCredentials>();
    let register = use_form::<RegistrationDetails>();

    let current = Memo::new(move |_| selector.with(|s| s.current()));

    let on_change = Callback::new(move |index: usize| {
        if let Some(Err(e)) = selector.try_update(|s| s.select_index(index)) {
            leptos::logging::warn!("Ignoring tab change: {}", e);
        }
    });

    let labels = AuthTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>();

    view! {
        <div class="auth-view" style:background-color=move || current.get().background()>
            <div class="auth-container">
                <div class="auth-paper">
                    <Tabs
                        labels=labels
                        selected=Signal::derive(move || current.get().index())
                        on_change=on_change
                        centered=true
                    />
                    {move || {
                        let tab = current.get();
                        match tab {
                            AuthTab::Login => view! {
                                <TabPanel index=tab.index()>
                                    <LoginForm form=login handler=DiagnosticLog />
                                </TabPanel>
                            }.into_any(),
                            AuthTab::Register => view! {
                                <TabPanel index=tab.index()>
                                    <RegisterForm form=register handler=DiagnosticLog />
                                </TabPanel>
                            }.into_any(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
