//! Authenticator trait and the built-in simulated implementation.

use std::fmt;
use std::thread;
use std::time::Duration;

use tracing::info;

use super::error::AuthError;
use super::form::{redact, AuthMode};

/// Third-party identity providers offered by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    GitHub,
    Google,
}

impl OAuthProvider {
    /// All providers in display order.
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::GitHub, OAuthProvider::Google];

    /// Identifier passed to the collaborator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Google => "google",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "Continue with GitHub",
            Self::Google => "Continue with Google",
        }
    }
}

/// Credentials handed to the collaborator for one submission.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("mode", &self.mode)
            .finish()
    }
}

/// A signed-in (or newly registered) user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub mode: AuthMode,
}

/// Backend the credential modal delegates to.
///
/// `authenticate` may block; it is called on the auth worker thread, never
/// on the UI loop.
pub trait Authenticator: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Verify (or register) the given credentials.
    fn authenticate(&self, request: &AuthRequest) -> Result<Session, AuthError>;

    /// Kick off a provider redirect. Fire-and-forget.
    fn start_oauth(&self, provider: OAuthProvider);
}

/// Stand-in backend: waits a fixed delay and accepts every request.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    /// Latency of the landing page's placeholder sign-in.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Authenticator for SimulatedAuthenticator {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn authenticate(&self, request: &AuthRequest) -> Result<Session, AuthError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        info!(email = %request.email, mode = %request.mode, "simulated authentication succeeded");
        Ok(Session {
            email: request.email.clone(),
            mode: request.mode,
        })
    }

    fn start_oauth(&self, provider: OAuthProvider) {
        info!(provider = provider.name(), "OAuth sign in requested");
    }
}
