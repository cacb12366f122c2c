//! Form mode, field values and local validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Which form the modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Modal heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    /// Line under the heading.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to access your BlitzCoder dashboard",
            Self::SignUp => "Join 10,000+ developers using BlitzCoder",
        }
    }

    /// Label of the submit button when idle.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    /// Prompt and link text for switching to the other mode.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Don't have an account? ", "Sign up"),
            Self::SignUp => ("Already have an account? ", "Sign in"),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => write!(f, "sign-in"),
            Self::SignUp => write!(f, "sign-up"),
        }
    }
}

/// A single input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "you@example.com",
            Self::Password => "Enter your password",
            Self::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn is_secret(self) -> bool {
        !matches!(self, Self::Email)
    }

    /// Fields rendered (and tab-cycled) for a mode, in display order.
    pub fn visible(mode: AuthMode) -> &'static [Field] {
        match mode {
            AuthMode::SignIn => &[Field::Email, Field::Password],
            AuthMode::SignUp => &[Field::Email, Field::Password, Field::ConfirmPassword],
        }
    }
}

/// Current contents of the form.
///
/// `confirm_password` is kept across mode toggles but only rendered and
/// validated in sign-up mode.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Fields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty() && self.confirm_password.is_empty()
    }
}

// Passwords never reach logs.
impl fmt::Debug for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fields")
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("confirm_password", &redact(&self.confirm_password))
            .finish()
    }
}

pub(crate) fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Validate the form for the given mode.
///
/// Rules run in order: both email and password are required, then in
/// sign-up mode the confirmation must equal the password.
pub fn validate(mode: AuthMode, fields: &Fields) -> Result<(), ValidationError> {
    if fields.email.is_empty() || fields.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if mode == AuthMode::SignUp && fields.password != fields.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, password: &str, confirm: &str) -> Fields {
        Fields {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn missing_email_fails() {
        let result = validate(AuthMode::SignIn, &fields("", "secret", ""));
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn missing_password_fails() {
        let result = validate(AuthMode::SignUp, &fields("a@b.com", "", ""));
        assert_eq!(result, Err(ValidationError::MissingFields));
    }

    #[test]
    fn sign_up_requires_matching_confirmation() {
        let result = validate(AuthMode::SignUp, &fields("a@b.com", "abc123", "xyz"));
        assert_eq!(result, Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn sign_in_ignores_confirmation() {
        assert_eq!(validate(AuthMode::SignIn, &fields("a@b.com", "x", "y")), Ok(()));
    }

    #[test]
    fn sign_up_with_matching_passwords_passes() {
        assert_eq!(
            validate(AuthMode::SignUp, &fields("a@b.com", "abc123", "abc123")),
            Ok(())
        );
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
    }

    #[test]
    fn confirm_field_only_visible_in_sign_up() {
        assert!(!Field::visible(AuthMode::SignIn).contains(&Field::ConfirmPassword));
        assert!(Field::visible(AuthMode::SignUp).contains(&Field::ConfirmPassword));
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let debug = format!("{:?}", fields("a@b.com", "hunter2", ""));
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
