//! Credential-entry modal
//!
//! A stub sign-in / sign-up flow: the form is validated locally, the
//! submission runs against an [`Authenticator`] on a background worker, and
//! the outcome is folded back into the modal as state. Nothing here ever
//! returns an error to the host; failures are shown inline.
//!
//! # Module Structure
//!
//! - [`state`] - `ModalState`, the pure `transition` function and the
//!   `CredentialModalController` wrapper
//! - `form` - mode, fields and validation rules
//! - `authenticator` - the collaborator trait and the simulated backend
//! - `worker` - background thread running submissions
//! - `error` - validation and authentication errors

mod authenticator;
mod error;
mod form;
pub mod state;
mod worker;

pub use authenticator::{AuthRequest, Authenticator, OAuthProvider, Session, SimulatedAuthenticator};
pub use error::{AuthError, ValidationError};
pub use form::{validate, AuthMode, Field, Fields};
pub use state::{
    transition, AuthCommand, CredentialModalController, ModalEvent, ModalState, Submission,
    SubmissionToken,
};
pub use worker::{worker_loop, AuthJob, AuthWorker, Resolution};
