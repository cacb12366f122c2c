//! Errors surfaced in the credential modal.
//!
//! Both kinds end up as the single inline message of the modal; neither is
//! ever fatal to the page.

/// Local, synchronous form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Failures reported by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authentication failed. Please try again.")]
    Rejected,

    #[error("Authentication service unavailable. Please try again.")]
    Unavailable,

    #[error("{0}")]
    Other(String),
}
