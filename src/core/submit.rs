//! Submit handlers receiving validated records

use super::credentials::{LoginCredentials, RegistrationDetails};

/// Receives a record after its form validated successfully.
///
/// This is the seam where a real authentication backend would be called.
pub trait SubmitHandler<T> {
    fn on_valid(&self, record: &T);
}

impl<T, F> SubmitHandler<T> for F
where
    F: Fn(&T),
{
    fn on_valid(&self, record: &T) {
        self(record)
    }
}

/// Records that have a diagnostic line prefix
pub trait Diagnostic: std::fmt::Debug {
    const ACTION: &'static str;
}

impl Diagnostic for LoginCredentials {
    const ACTION: &'static str = "Logging in";
}

impl Diagnostic for RegistrationDetails {
    const ACTION: &'static str = "Registering";
}

/// Format the line written by [`DiagnosticLog`]
pub fn diagnostic_line<T: Diagnostic>(record: &T) -> String {
    format!("{}: {:?}", T::ACTION, record)
}

/// Logs each submitted record and does nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticLog;

impl<T: Diagnostic> SubmitHandler<T> for DiagnosticLog {
    fn on_valid(&self, record: &T) {
        leptos::logging::log!("{}", diagnostic_line(record));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_closures_are_handlers() {
        let seen = RefCell::new(Vec::new());
        let handler = |creds: &LoginCredentials| seen.borrow_mut().push(creds.email.clone());

        let creds = LoginCredentials {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        handler.on_valid(&creds);
        handler.on_valid(&creds);

        assert_eq!(*seen.borrow(), vec!["a@b.com", "a@b.com"]);
    }

    #[test]
    fn test_diagnostic_lines() {
        let creds = LoginCredentials {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let line = diagnostic_line(&creds);
        assert!(line.starts_with("Logging in: "));
        assert!(line.contains("a@b.com"));
        assert!(!line.contains("secret"));

        let details = RegistrationDetails {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        let line = diagnostic_line(&details);
        assert!(line.starts_with("Registering: "));
        assert!(!line.contains("secret1"));
    }

    #[test]
    fn test_diagnostic_log_leaves_record_untouched() {
        let creds = LoginCredentials {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let before = creds.clone();
        DiagnosticLog.on_valid(&creds);
        assert_eq!(creds, before);
    }
}
