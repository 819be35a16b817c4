//! Declarative field validation
//!
//! A [`FormSchema`] is a static table of fields, each carrying an ordered list
//! of [`Rule`]s. Validation runs over the whole field set at once and yields
//! either [`ValidValues`] or the first failing message of every bad field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Email syntax accepted by the forms.
///
/// Local part of letters, digits and `_ ' + - .`, ending in a letter, digit,
/// `_`, `+` or `-`; then one or more `label.` groups and a TLD of two letters
/// or more. Only ASCII letters count, so no case-folding flag is used.
/// Leading dots and `..` are rejected separately in [`is_email`].
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether `value` is a syntactically valid email address
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

/// Length of a field value in UTF-16 code units, as browsers count it
pub fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// A single predicate applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be at least `min` characters long
    MinLength { min: usize, message: &'static str },
    /// Value must be an email address
    Email { message: &'static str },
}

impl Rule {
    /// Message surfaced when this rule fails
    pub fn message(&self) -> &'static str {
        match self {
            Rule::MinLength { message, .. } | Rule::Email { message } => message,
        }
    }

    /// Run the rule against a value
    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::MinLength { min, .. } => input_length(value) >= *min,
            Rule::Email { .. } => is_email(value),
        }
    }
}

/// Rules for one named field
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSchema {
    /// First failing rule for `value`, if any
    pub fn first_failure(&self, value: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| !rule.check(value))
    }
}

/// Validation error for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Errors from one validation pass, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldValidationError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error for `field`, if it failed
    pub fn get(&self, field: &str) -> Option<&FieldValidationError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Names of the failing fields
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// Raw field values keyed by field name
pub type FieldValues = BTreeMap<&'static str, String>;

/// Field values that passed their schema
///
/// Only [`FormSchema::validate`] constructs this, so anything built from it has
/// been validated.
#[derive(Debug)]
pub struct ValidValues {
    values: FieldValues,
}

impl ValidValues {
    /// Move a value out; fields absent from the input were validated as empty
    pub fn take(&mut self, field: &str) -> String {
        self.values.remove(field).unwrap_or_default()
    }
}

/// Static validation table for a whole form
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    pub fields: &'static [FieldSchema],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Resolve a field name to its `'static` form
    pub fn field_name(&self, name: &str) -> Option<&'static str> {
        self.field(name).map(|f| f.name)
    }

    /// Validate every field; missing values count as empty strings
    pub fn validate(&self, values: &FieldValues) -> Result<ValidValues, FieldErrors> {
        let mut errors = Vec::new();
        let mut valid = FieldValues::new();

        for field in self.fields {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            match field.first_failure(value) {
                Some(rule) => errors.push(FieldValidationError {
                    field: field.name,
                    message: rule.message(),
                }),
                None => {
                    valid.insert(field.name, value.to_string());
                }
            }
        }

        if errors.is_empty() {
            Ok(ValidValues { values: valid })
        } else {
            Err(FieldErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: FormSchema = FormSchema {
        fields: &[
            FieldSchema {
                name: "code",
                rules: &[
                    Rule::MinLength {
                        min: 1,
                        message: "required",
                    },
                    Rule::MinLength {
                        min: 4,
                        message: "too short",
                    },
                ],
            },
            FieldSchema {
                name: "email",
                rules: &[Rule::Email { message: "bad email" }],
            },
        ],
    };

    fn values(pairs: &[(&'static str, &str)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_email("a@b.com"));
        assert!(is_email("john.doe@example.co.uk"));
        assert!(is_email("User+tag@Mail-Server.ORG"));
        assert!(is_email("o'brien_x@sub.domain.io"));
        assert!(is_email("a-@b.cd"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_email(""));
        assert!(!is_email("plainaddress"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@b.c"));
        assert!(!is_email(".a@b.com"));
        assert!(!is_email("a..b@c.com"));
        assert!(!is_email("a.@b.com"));
        assert!(!is_email("a'@b.com"));
        assert!(!is_email("a@-b.com"));
        assert!(!is_email("a@b.c0m"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email(" a@b.com"));
    }

    #[test]
    fn test_non_ascii_letters_are_rejected() {
        // Long s and the Kelvin sign case-fold to ASCII letters under Unicode rules
        assert!(!is_email("\u{17F}@b.com"));
        assert!(!is_email("a@b.\u{212A}\u{212A}"));
        assert!(!is_email("jos\u{E9}@b.com"));
        assert!(!is_email("a@b\u{FC}.com"));
    }

    #[test]
    fn test_input_length_counts_utf16_units() {
        assert_eq!(input_length(""), 0);
        assert_eq!(input_length("abc"), 3);
        assert_eq!(input_length("héllo"), 5);
        // Astral-plane characters take two units
        assert_eq!(input_length("😀😀😀"), 6);
    }

    #[test]
    fn test_rule_messages_and_checks() {
        let rule = Rule::MinLength {
            min: 2,
            message: "short",
        };
        assert_eq!(rule.message(), "short");
        assert!(!rule.check("a"));
        assert!(rule.check("ab"));
        assert!(rule.check("  "));

        let rule = Rule::Email { message: "email" };
        assert_eq!(rule.message(), "email");
        assert!(rule.check("x@y.io"));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let errors = SCHEMA
            .validate(&values(&[("code", ""), ("email", "x@y.io")]))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("code").unwrap().message, "required");

        let errors = SCHEMA
            .validate(&values(&[("code", "ab"), ("email", "x@y.io")]))
            .unwrap_err();
        assert_eq!(errors.get("code").unwrap().message, "too short");
    }

    #[test]
    fn test_errors_reported_for_every_field_in_schema_order() {
        let errors = SCHEMA.validate(&FieldValues::new()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["code", "email"]);
        assert_eq!(errors.to_string(), "code: required, email: bad email");
    }

    #[test]
    fn test_valid_values_take() {
        let mut valid = SCHEMA
            .validate(&values(&[("code", "abcd"), ("email", "x@y.io"), ("extra", "z")]))
            .unwrap();
        assert_eq!(valid.take("code"), "abcd");
        assert_eq!(valid.take("email"), "x@y.io");
        // Fields outside the schema are not carried over
        assert_eq!(valid.take("extra"), "");
    }

    #[test]
    fn test_field_lookup() {
        assert!(SCHEMA.has_field("code"));
        assert!(!SCHEMA.has_field("name"));
        assert_eq!(SCHEMA.field_name("email"), Some("email"));
        assert_eq!(SCHEMA.field_name("nope"), None);
    }

    #[test]
    fn test_field_validation_error_display() {
        let err = FieldValidationError {
            field: "email",
            message: "bad email",
        };
        assert_eq!(err.to_string(), "bad email");
    }
}
