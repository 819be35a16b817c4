//! Per-form value store and submit cycle

use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

use super::credentials::FormRecord;
use super::submit::SubmitHandler;
use super::validation::{FieldErrors, FieldValidationError, FieldValues, FormSchema};

/// Where the form is in its current submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Never submitted, or reset
    #[default]
    Idle,
    /// Schema validation in progress
    Validating,
    /// Last submit produced a record
    Valid,
    /// Last submit produced field errors
    Invalid,
}

/// Misuse of the field binding API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Field '{0}' is not part of this form")]
    UnknownField(String),

    #[error("Field '{0}' was changed before it was registered")]
    Unregistered(&'static str),
}

/// Field values, errors and submit state for one form
#[derive(Debug, Clone)]
pub struct FormModel<T: FormRecord> {
    values: FieldValues,
    errors: BTreeMap<&'static str, FieldValidationError>,
    registered: BTreeSet<&'static str>,
    state: SubmitState,
    submit_count: u32,
    _record: PhantomData<fn() -> T>,
}

impl<T: FormRecord> Default for FormModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FormRecord> FormModel<T> {
    pub fn new() -> Self {
        Self {
            values: FieldValues::new(),
            errors: BTreeMap::new(),
            registered: BTreeSet::new(),
            state: SubmitState::Idle,
            submit_count: 0,
            _record: PhantomData,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        T::schema()
    }

    fn resolve(&self, name: &str) -> Result<&'static str, FormError> {
        self.schema()
            .field_name(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Bind a field so its change events reach the value store
    pub fn register(&mut self, name: &str) -> Result<&'static str, FormError> {
        let field = self.resolve(name)?;
        self.registered.insert(field);
        Ok(field)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    /// Store a new value for a registered field without validating it
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self.resolve(name)?;
        if !self.registered.contains(field) {
            return Err(FormError::Unregistered(field));
        }
        self.values.insert(field, value.into());
        Ok(())
    }

    /// Current value of a field; empty until something is typed
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Message from the last submit for this field, if it failed
    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).map(|e| e.message)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.values()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validate the whole form and build the record on success
    ///
    /// The error map is replaced by the outcome of this attempt, so errors from
    /// an earlier submit never linger.
    pub fn submit(&mut self) -> Result<T, FieldErrors> {
        self.submit_count += 1;
        self.state = SubmitState::Validating;

        match self.schema().validate(&self.values) {
            Ok(valid) => {
                self.errors.clear();
                self.state = SubmitState::Valid;
                Ok(T::from_valid(valid))
            }
            Err(errors) => {
                self.errors = errors.iter().map(|e| (e.field, *e)).collect();
                self.state = SubmitState::Invalid;
                Err(errors)
            }
        }
    }

    /// Submit and hand a valid record to `on_valid` exactly once
    pub fn handle_submit(&mut self, on_valid: &impl SubmitHandler<T>) -> SubmitState {
        if let Ok(record) = self.submit() {
            on_valid.on_valid(&record);
        }
        self.state
    }

    /// Clear values, errors and state; registrations are kept
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.state = SubmitState::Idle;
        self.submit_count = 0;
    }
}
