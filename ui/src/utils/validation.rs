/// Minimum password length accepted by the identity provider
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PasswordValidation {
    None,
    TooShort,
    NoMatch,
    Match,
}

pub fn validate_email(email: &str) -> EmailValidation {
    let email = email.trim();
    if email.is_empty() {
        return EmailValidation::None;
    }

    // Exactly one @, non-empty local part, dotted domain
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return EmailValidation::Invalid;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    if !local_part.is_empty()
        && domain_part.contains('.')
        && domain_part.len() > 2
        && !domain_part.starts_with('.')
        && !domain_part.ends_with('.')
    {
        EmailValidation::Valid
    } else {
        EmailValidation::Invalid
    }
}

pub fn validate_new_password(password: &str, confirm: &str) -> PasswordValidation {
    if password.is_empty() && confirm.is_empty() {
        PasswordValidation::None
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        PasswordValidation::TooShort
    } else if password == confirm {
        PasswordValidation::Match
    } else {
        PasswordValidation::NoMatch
    }
}

pub fn email_validation_class(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "input-field input-valid",
        EmailValidation::Invalid => "input-field input-invalid",
        _ => "input-field",
    }
}

pub fn password_validation_class(validation: &PasswordValidation) -> &'static str {
    match validation {
        PasswordValidation::Match => "input-field input-valid",
        PasswordValidation::NoMatch | PasswordValidation::TooShort => "input-field input-invalid",
        _ => "input-field",
    }
}

pub fn password_validation_message(validation: &PasswordValidation) -> Option<String> {
    match validation {
        PasswordValidation::TooShort => Some(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )),
        PasswordValidation::NoMatch => Some("Passwords do not match".to_string()),
        _ => None,
    }
}

/// Sign-in needs a valid email and any password
pub fn sign_in_ready(email: &str, password: &str) -> bool {
    validate_email(email) == EmailValidation::Valid && !password.is_empty()
}

pub fn sign_up_ready(email: &str, password: &str, confirm: &str) -> bool {
    validate_email(email) == EmailValidation::Valid
        && validate_new_password(password, confirm) == PasswordValidation::Match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(""), EmailValidation::None);
        assert_eq!(validate_email("  a@b.com "), EmailValidation::Valid);
        assert_eq!(validate_email("a@b"), EmailValidation::Invalid);
        assert_eq!(validate_email("@b.com"), EmailValidation::Invalid);
        assert_eq!(validate_email("a@@b.com"), EmailValidation::Invalid);
        assert_eq!(validate_email("a@.com"), EmailValidation::Invalid);
    }

    #[test]
    fn test_validate_new_password() {
        assert_eq!(validate_new_password("", ""), PasswordValidation::None);
        assert_eq!(validate_new_password("abc", "abc"), PasswordValidation::TooShort);
        assert_eq!(validate_new_password("secret1", "secret2"), PasswordValidation::NoMatch);
        assert_eq!(validate_new_password("secret1", "secret1"), PasswordValidation::Match);
    }

    #[test]
    fn test_form_readiness() {
        assert!(sign_in_ready("a@b.com", "x"));
        assert!(!sign_in_ready("a@b.com", ""));
        assert!(!sign_in_ready("not-an-email", "x"));

        assert!(sign_up_ready("a@b.com", "secret1", "secret1"));
        assert!(!sign_up_ready("a@b.com", "secret1", "secret"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            password_validation_message(&PasswordValidation::TooShort).unwrap(),
            "Password must be at least 6 characters"
        );
        assert_eq!(password_validation_message(&PasswordValidation::Match), None);
    }
}
