//! Credential modal state machine
//!
//! The modal is modeled as:
//! ```text
//! ModalState × ModalEvent → (ModalState, Vec<AuthCommand>)
//! ```
//!
//! Side effects (talking to the authenticator) never happen here; they are
//! returned as [`AuthCommand`]s for the host to execute. Results come back
//! as [`ModalEvent::Resolved`] tagged with the token they were issued for.

use std::fmt;

use tracing::{debug, info};

use super::authenticator::{AuthRequest, OAuthProvider, Session};
use super::error::AuthError;
use super::form::{validate, AuthMode, Field, Fields};

/// Identifies one submission attempt.
///
/// Tokens come from a monotonically increasing counter, so a resolution
/// carrying an older token can always be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionToken(pub u64);

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Submission lifecycle of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    /// Waiting for the authenticator to answer `token`
    InFlight { token: SubmissionToken },
    /// Last attempt failed; the reason is shown inline
    Failed(String),
    /// Last attempt succeeded; the modal has closed
    Succeeded,
}

impl Submission {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Message for the inline error slot.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Everything the modal knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub mode: AuthMode,
    pub fields: Fields,
    pub password_visible: bool,
    pub submission: Submission,
    /// Last issued submission token
    pub generation: u64,
}

/// Inputs to the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Open(AuthMode),
    Close,
    ToggleMode,
    TogglePasswordVisibility,
    Edit { field: Field, value: String },
    Submit,
    Resolved {
        token: SubmissionToken,
        outcome: Result<Session, AuthError>,
    },
    ContinueWithProvider(OAuthProvider),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCommand {
    /// Run the authenticator; answer with `ModalEvent::Resolved { token, .. }`
    Authenticate {
        token: SubmissionToken,
        request: AuthRequest,
    },
    /// Forward a provider sign-in to the collaborator
    StartOAuth { provider: OAuthProvider },
    /// A submission succeeded and the modal closed
    SignedIn(Session),
}

/// Apply one event to the modal.
pub fn transition(state: &ModalState, event: ModalEvent) -> (ModalState, Vec<AuthCommand>) {
    let mut next = state.clone();
    let mut commands = Vec::new();

    match event {
        ModalEvent::Open(mode) => {
            next.is_open = true;
            next.mode = mode;
            if next.submission == Submission::Succeeded {
                next.submission = Submission::Idle;
            }
        }
        ModalEvent::Close => {
            if let Submission::InFlight { token } = next.submission {
                debug!(%token, "modal closed with submission in flight; cancelling");
            }
            next.is_open = false;
            next.mode = AuthMode::SignIn;
            next.fields.clear();
            next.submission = Submission::Idle;
        }
        ModalEvent::ToggleMode => {
            // An error from the previous attempt stays visible
            next.mode = next.mode.toggled();
        }
        ModalEvent::TogglePasswordVisibility => {
            next.password_visible = !next.password_visible;
        }
        ModalEvent::Edit { field, value } => {
            next.fields.set(field, value);
            if matches!(next.submission, Submission::Failed(_)) {
                next.submission = Submission::Idle;
            }
        }
        ModalEvent::Submit => {
            if !next.is_open || next.submission.is_in_flight() {
                return (next, commands);
            }
            next.submission = Submission::Idle;
            match validate(next.mode, &next.fields) {
                Err(e) => {
                    debug!(error = %e, "form validation failed");
                    next.submission = Submission::Failed(e.to_string());
                }
                Ok(()) => {
                    next.generation += 1;
                    let token = SubmissionToken(next.generation);
                    info!(%token, mode = %next.mode, "submitting credentials");
                    next.submission = Submission::InFlight { token };
                    commands.push(AuthCommand::Authenticate {
                        token,
                        request: AuthRequest {
                            email: next.fields.email.clone(),
                            password: next.fields.password.clone(),
                            mode: next.mode,
                        },
                    });
                }
            }
        }
        ModalEvent::Resolved { token, outcome } => {
            if next.submission != (Submission::InFlight { token }) {
                debug!(%token, "discarding stale authentication result");
                return (next, commands);
            }
            match outcome {
                Ok(session) => {
                    info!(%token, email = %session.email, "authentication succeeded");
                    next.submission = Submission::Succeeded;
                    next.is_open = false;
                    next.mode = AuthMode::SignIn;
                    next.fields.clear();
                    commands.push(AuthCommand::SignedIn(session));
                }
                Err(e) => {
                    info!(%token, error = %e, "authentication failed");
                    next.submission = Submission::Failed(e.to_string());
                }
            }
        }
        ModalEvent::ContinueWithProvider(provider) => {
            commands.push(AuthCommand::StartOAuth { provider });
        }
    }

    (next, commands)
}

/// Stateful wrapper around [`transition`] used by the host.
#[derive(Debug, Clone, Default)]
pub struct CredentialModalController {
    state: ModalState,
}

impl CredentialModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn mode(&self) -> AuthMode {
        self.state.mode
    }

    pub fn submission(&self) -> &Submission {
        &self.state.submission
    }

    /// Feed any event and collect the commands it produced.
    pub fn dispatch(&mut self, event: ModalEvent) -> Vec<AuthCommand> {
        let (next, commands) = transition(&self.state, event);
        self.state = next;
        commands
    }

    pub fn open(&mut self, mode: AuthMode) {
        self.dispatch(ModalEvent::Open(mode));
    }

    pub fn close(&mut self) {
        self.dispatch(ModalEvent::Close);
    }

    pub fn toggle_mode(&mut self) {
        self.dispatch(ModalEvent::ToggleMode);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.dispatch(ModalEvent::TogglePasswordVisibility);
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(ModalEvent::Edit {
            field,
            value: value.into(),
        });
    }

    /// Append one typed character to a field.
    pub fn push_char(&mut self, field: Field, ch: char) {
        let mut value = self.state.fields.get(field).to_string();
        value.push(ch);
        self.edit(field, value);
    }

    /// Remove the last character of a field.
    pub fn backspace(&mut self, field: Field) {
        let mut value = self.state.fields.get(field).to_string();
        if value.pop().is_some() {
            self.edit(field, value);
        }
    }

    pub fn submit(&mut self) -> Vec<AuthCommand> {
        self.dispatch(ModalEvent::Submit)
    }

    pub fn resolve(
        &mut self,
        token: SubmissionToken,
        outcome: Result<Session, AuthError>,
    ) -> Vec<AuthCommand> {
        self.dispatch(ModalEvent::Resolved { token, outcome })
    }

    pub fn continue_with_provider(&mut self, provider: OAuthProvider) -> Vec<AuthCommand> {
        self.dispatch(ModalEvent::ContinueWithProvider(provider))
    }
}
