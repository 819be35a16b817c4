//! Reactive binding between form inputs and a [`FormModel`]
//!
//! `use_form` puts the model in a signal; `register` hands each input its
//! value, change callback and error message.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::{FormModel, FormRecord, SubmitHandler, SubmitState};

/// Reactive view of one registered field
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub name: &'static str,
    pub value: Signal<String>,
    pub on_input: Callback<String>,
    pub error: Signal<Option<String>>,
}

/// Copyable handle to a form model owned by the reactive runtime
pub struct FormHandle<T: FormRecord + Send + Sync + 'static> {
    model: RwSignal<FormModel<T>>,
}

impl<T: FormRecord + Send + Sync + 'static> Clone for FormHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FormRecord + Send + Sync + 'static> Copy for FormHandle<T> {}

/// Create a form bound to `T`'s schema
pub fn use_form<T: FormRecord + Send + Sync + 'static>() -> FormHandle<T> {
    FormHandle {
        model: RwSignal::new(FormModel::new()),
    }
}

impl<T: FormRecord + Send + Sync + 'static> FormHandle<T> {
    /// Bind an input to the field `name`
    ///
    /// Unknown fields are logged and get an inert binding.
    pub fn register(&self, name: &'static str) -> FieldBinding {
        let model = self.model;
        let bound = match model.try_update(|m| m.register(name)) {
            Some(Ok(_)) => true,
            Some(Err(e)) => {
                leptos::logging::error!("Cannot bind input: {}", e);
                false
            }
            None => false,
        };

        let on_input = Callback::new(move |value: String| {
            if !bound {
                return;
            }
            if let Some(Err(e)) = model.try_update(|m| m.set_value(name, value)) {
                leptos::logging::warn!("Dropped input: {}", e);
            }
        });

        FieldBinding {
            name,
            value: Signal::derive(move || model.with(|m| m.value(name).to_string())),
            on_input,
            error: Signal::derive(move || model.with(|m| m.error(name).map(str::to_string))),
        }
    }

    pub fn state(&self) -> Signal<SubmitState> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.state()))
    }

    /// Validate the form and pass a valid record to `handler` exactly once
    ///
    /// The handler runs after the model update has finished, so it may read
    /// the form freely.
    pub fn submit_with(self, handler: &impl SubmitHandler<T>) -> SubmitState {
        match self.model.try_update(|m| (m.submit(), m.state())) {
            Some((Ok(record), state)) => {
                handler.on_valid(&record);
                state
            }
            Some((Err(_), state)) => state,
            None => SubmitState::Idle,
        }
    }

    /// Submit listener that blocks the browser submission and calls [`Self::submit_with`]
    pub fn on_submit<H>(self, handler: H) -> impl Fn(SubmitEvent) + 'static
    where
        H: SubmitHandler<T> + 'static,
    {
        move |ev: SubmitEvent| {
            ev.prevent_default();
            self.submit_with(&handler);
        }
    }
}
