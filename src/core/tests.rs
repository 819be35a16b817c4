#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::core::{
        AuthTab, FormModel, LoginCredentials, RegistrationDetails, SubmitState, TabSelector,
        fields,
    };

    fn login(email: &str, password: &str) -> FormModel<LoginCredentials> {
        let mut form = FormModel::new();
        form.register(fields::EMAIL).unwrap();
        form.register(fields::PASSWORD).unwrap();
        form.set_value(fields::EMAIL, email).unwrap();
        form.set_value(fields::PASSWORD, password).unwrap();
        form
    }

    fn register(name: &str, email: &str, password: &str) -> FormModel<RegistrationDetails> {
        let mut form = FormModel::new();
        for field in [fields::NAME, fields::EMAIL, fields::PASSWORD] {
            form.register(field).unwrap();
        }
        form.set_value(fields::NAME, name).unwrap();
        form.set_value(fields::EMAIL, email).unwrap();
        form.set_value(fields::PASSWORD, password).unwrap();
        form
    }

    const BAD_EMAILS: &[&str] = &[
        "",
        "a",
        "a@",
        "@b.com",
        "a@b",
        "a@b.c",
        "a b@c.com",
        "a@@b.com",
        ".a@b.com",
        "a..b@c.com",
        "a@b..com",
    ];

    #[test]
    fn test_bad_email_blocks_both_forms() {
        for email in BAD_EMAILS {
            let calls = RefCell::new(0);
            let on_login = |_: &LoginCredentials| *calls.borrow_mut() += 1;
            let on_register = |_: &RegistrationDetails| *calls.borrow_mut() += 1;

            let mut form = login(email, "secret");
            assert_eq!(form.handle_submit(&on_login), SubmitState::Invalid);
            assert!(form.error(fields::EMAIL).is_some(), "login accepted {email:?}");

            let mut form = register("Ann", email, "secret");
            assert_eq!(form.handle_submit(&on_register), SubmitState::Invalid);
            assert!(form.error(fields::EMAIL).is_some(), "register accepted {email:?}");

            assert_eq!(*calls.borrow(), 0);
        }
    }

    #[test]
    fn test_short_password_only_fails_register() {
        for password in ["a", "ab", "abc", "abcd", "abcde"] {
            let errors = register("Ann", "a@b.com", password).submit().unwrap_err();
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![fields::PASSWORD]);

            assert!(login("a@b.com", password).submit().is_ok());
        }
    }

    #[test]
    fn test_empty_password_fails_login() {
        let errors = login("a@b.com", "").submit().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![fields::PASSWORD]);
    }

    #[test]
    fn test_valid_login_reaches_handler_once() {
        let seen = RefCell::new(Vec::new());
        let handler = |creds: &LoginCredentials| seen.borrow_mut().push(creds.clone());

        let mut form = login("a@b.com", "secret");
        assert_eq!(form.handle_submit(&handler), SubmitState::Valid);

        assert_eq!(
            *seen.borrow(),
            vec![LoginCredentials {
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_name_is_the_only_register_error() {
        let calls = RefCell::new(0);
        let handler = |_: &RegistrationDetails| *calls.borrow_mut() += 1;

        let mut form = register("", "a@b.com", "secret1");
        assert_eq!(form.handle_submit(&handler), SubmitState::Invalid);

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(form.error(fields::NAME), Some("Write name"));
        assert!(form.error(fields::EMAIL).is_none());
        assert!(form.error(fields::PASSWORD).is_none());
    }

    #[test]
    fn test_tab_switching_shares_no_values() {
        let mut selector = TabSelector::new();
        let mut login_form = FormModel::<LoginCredentials>::new();
        let mut register_form = FormModel::<RegistrationDetails>::new();
        login_form.register(fields::EMAIL).unwrap();
        register_form.register(fields::EMAIL).unwrap();

        selector.select(AuthTab::Register);
        register_form.set_value(fields::EMAIL, "reg@b.com").unwrap();
        selector.select(AuthTab::Login);

        assert_eq!(selector.current(), AuthTab::Login);
        assert_eq!(login_form.value(fields::EMAIL), "");

        login_form.set_value(fields::EMAIL, "log@b.com").unwrap();
        assert_eq!(register_form.value(fields::EMAIL), "reg@b.com");

        register_form.submit().unwrap_err();
        assert!(!login_form.has_errors());
    }

    #[test]
    fn test_resubmitting_valid_form() {
        let seen = RefCell::new(Vec::new());
        let handler = |details: &RegistrationDetails| seen.borrow_mut().push(details.clone());

        let mut form = register("Ann", "a@b.com", "secret1");
        for _ in 0..3 {
            assert_eq!(form.handle_submit(&handler), SubmitState::Valid);
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|d| *d == seen[0]));
        assert_eq!(seen[0].name, "Ann");
        assert_eq!(form.submit_count(), 3);
    }
}
