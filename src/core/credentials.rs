//! Typed records produced by the login and registration forms

use serde::Serialize;

use super::validation::{FieldSchema, FormSchema, Rule, ValidValues};

/// Field names shared by both forms
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

/// Minimum password length when creating an account
pub const MIN_REGISTER_PASSWORD_LENGTH: usize = 6;

pub static LOGIN_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSchema {
            name: fields::EMAIL,
            rules: &[Rule::Email {
                message: "write corrcet email",
            }],
        },
        FieldSchema {
            name: fields::PASSWORD,
            rules: &[Rule::MinLength {
                min: 1,
                message: "must include password",
            }],
        },
    ],
};

pub static REGISTER_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSchema {
            name: fields::NAME,
            rules: &[Rule::MinLength {
                min: 1,
                message: "Write name",
            }],
        },
        FieldSchema {
            name: fields::EMAIL,
            rules: &[Rule::Email {
                message: "Write corrett email",
            }],
        },
        FieldSchema {
            name: fields::PASSWORD,
            rules: &[Rule::MinLength {
                min: MIN_REGISTER_PASSWORD_LENGTH,
                message: "write longer password",
            }],
        },
    ],
};

/// A record that can only be built from values validated by its schema
pub trait FormRecord: Sized {
    /// Schema the record's fields are validated against
    fn schema() -> &'static FormSchema;

    /// Build the record from validated values
    fn from_valid(values: ValidValues) -> Self;
}

/// Credentials submitted from the login tab
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl FormRecord for LoginCredentials {
    fn schema() -> &'static FormSchema {
        &LOGIN_SCHEMA
    }

    fn from_valid(mut values: ValidValues) -> Self {
        Self {
            email: values.take(fields::EMAIL),
            password: values.take(fields::PASSWORD),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

/// Details submitted from the create-account tab
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormRecord for RegistrationDetails {
    fn schema() -> &'static FormSchema {
        &REGISTER_SCHEMA
    }

    fn from_valid(mut values: ValidValues) -> Self {
        Self {
            name: values.take(fields::NAME),
            email: values.take(fields::EMAIL),
            password: values.take(fields::PASSWORD),
        }
    }
}

impl std::fmt::Debug for RegistrationDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationDetails")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}
