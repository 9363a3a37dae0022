use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length for new accounts
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Message shown when the login form is incomplete
pub const LOGIN_ERROR: &str = "Please enter valid username and password";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern compiles"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
        r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
    ))
    .expect("email pattern compiles")
});

/// Raw values typed into the create-account form
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub repeat_password: String,
    pub contact_number: String,
    pub email: String,
}

/// One optional inline message per create-account field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountErrors {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub repeat_password: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}

impl AccountErrors {
    /// True when no field carries a message
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.repeat_password.is_none()
            && self.contact_number.is_none()
            && self.email.is_none()
    }
}

/// Checks a username against the length and character rules
pub fn check_username(username: &str, min_length: usize) -> Option<String> {
    let username = username.trim();
    if username.is_empty() {
        Some("Username is required.".to_string())
    } else if username.chars().count() < min_length {
        Some(format!("Username must be at least {} characters.", min_length))
    } else if !USERNAME_RE.is_match(username) {
        Some("Username can only contain letters, numbers, and underscores.".to_string())
    } else {
        None
    }
}

/// Checks a new password; blank means missing, length counts every character
pub fn check_password(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        Some("Password is required.".to_string())
    } else if password.chars().count() < PASSWORD_MIN_LENGTH {
        Some(format!(
            "Password must be at least {} characters.",
            PASSWORD_MIN_LENGTH
        ))
    } else {
        None
    }
}

pub fn check_repeat_password(password: &str, repeat: &str) -> Option<String> {
    if repeat.trim().is_empty() {
        Some("Please confirm your password.".to_string())
    } else if password != repeat {
        Some("Passwords do not match.".to_string())
    } else {
        None
    }
}

pub fn check_contact_number(contact: &str) -> Option<String> {
    let contact = contact.trim();
    if contact.is_empty() {
        Some("Contact number is required.".to_string())
    } else if !contact.chars().all(|c| c.is_ascii_digit()) {
        Some("Please enter a valid number.".to_string())
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        Some("Email is required.".to_string())
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address.".to_string())
    } else {
        None
    }
}

/// Whether `email` looks like a conventional mail address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates every create-account field
///
/// All fields are checked so each one can show its own message.
///
/// # Arguments
/// * `form` - The values typed by the user
/// * `min_username_length` - Configured minimum username length
pub fn validate_account(form: &AccountForm, min_username_length: usize) -> AccountErrors {
    AccountErrors {
        full_name: form
            .full_name
            .trim()
            .is_empty()
            .then(|| "Full name is required.".to_string()),
        username: check_username(&form.username, min_username_length),
        password: check_password(&form.password),
        repeat_password: check_repeat_password(&form.password, &form.repeat_password),
        contact_number: check_contact_number(&form.contact_number),
        email: check_email(&form.email),
    }
}

/// Validates the login form; both fields must be filled in
pub fn validate_login(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        Err(LOGIN_ERROR)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> AccountForm {
        AccountForm {
            full_name: "Julian Agustino".to_string(),
            username: "julian_a".to_string(),
            password: "secret123".to_string(),
            repeat_password: "secret123".to_string(),
            contact_number: "09123456789".to_string(),
            email: "julian@pawtrack.org".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate_account(&valid_form(), 3);
        assert!(errors.is_empty());
        assert_eq!(errors, AccountErrors::default());
    }

    #[test]
    fn test_short_username() {
        assert_eq!(
            check_username("ab", 3),
            Some("Username must be at least 3 characters.".to_string())
        );
        assert_eq!(
            check_username("abcdefg", 8),
            Some("Username must be at least 8 characters.".to_string())
        );
        assert_eq!(check_username("abc", 3), None);
    }

    #[test]
    fn test_username_characters() {
        assert_eq!(check_username("  ", 3), Some("Username is required.".to_string()));
        assert_eq!(
            check_username("bad name", 3),
            Some("Username can only contain letters, numbers, and underscores.".to_string())
        );
        assert_eq!(check_username("  good_name_1  ", 3), None);
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(check_password("   "), Some("Password is required.".to_string()));
        assert_eq!(
            check_password("short"),
            Some("Password must be at least 8 characters.".to_string())
        );
        assert_eq!(check_password("longenough"), None);
    }

    #[test]
    fn test_repeat_password() {
        assert_eq!(
            check_repeat_password("secret123", ""),
            Some("Please confirm your password.".to_string())
        );
        assert_eq!(
            check_repeat_password("secret123", "secret124"),
            Some("Passwords do not match.".to_string())
        );
        assert_eq!(check_repeat_password("secret123", "secret123"), None);
    }

    #[test]
    fn test_contact_number() {
        assert_eq!(
            check_contact_number(""),
            Some("Contact number is required.".to_string())
        );
        assert_eq!(
            check_contact_number("0912-345"),
            Some("Please enter a valid number.".to_string())
        );
        assert_eq!(
            check_contact_number("١٢٣"),
            Some("Please enter a valid number.".to_string())
        );
        assert_eq!(check_contact_number(" 0912345 "), None);
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("\"odd name\"@example.com"));
        assert!(is_valid_email("admin@[192.168.0.1]"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user.@example.com"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(check_email(""), Some("Email is required.".to_string()));
        assert_eq!(
            check_email("not-an-email"),
            Some("Please enter a valid email address.".to_string())
        );
    }

    #[test]
    fn test_every_field_is_checked() {
        let errors = validate_account(&AccountForm::default(), 3);
        assert_eq!(errors.full_name.as_deref(), Some("Full name is required."));
        assert_eq!(errors.username.as_deref(), Some("Username is required."));
        assert_eq!(errors.password.as_deref(), Some("Password is required."));
        assert_eq!(
            errors.repeat_password.as_deref(),
            Some("Please confirm your password.")
        );
        assert_eq!(
            errors.contact_number.as_deref(),
            Some("Contact number is required.")
        );
        assert_eq!(errors.email.as_deref(), Some("Email is required."));
    }

    #[test]
    fn test_single_bad_field() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        let errors = validate_account(&form, 3);
        assert_eq!(
            errors,
            AccountErrors {
                email: Some("Please enter a valid email address.".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_login() {
        assert_eq!(validate_login("", "pw"), Err(LOGIN_ERROR));
        assert_eq!(validate_login("   ", "pw"), Err(LOGIN_ERROR));
        assert_eq!(validate_login("paul", ""), Err(LOGIN_ERROR));
        assert_eq!(validate_login(" paul ", "pw"), Ok(()));
    }
}
