//! The landing page host
//!
//! Mounts the hero terminal and the credential modal as two independent
//! pieces of state, routes page actions to them, and executes the modal's
//! side-effect commands against the auth worker.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::content::ENTERPRISE_PLAN;
use crate::auth::{
    AuthCommand, AuthMode, Authenticator, AuthWorker, CredentialModalController, Field,
    ModalEvent, Session,
};
use crate::player::{PlaybackTiming, Script, TerminalPlayer};

/// Page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Features,
    HowItWorks,
    Pricing,
    Footer,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Features,
        Section::HowItWorks,
        Section::Pricing,
        Section::Footer,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Features => "Features",
            Section::HowItWorks => "How It Works",
            Section::Pricing => "Pricing",
            Section::Footer => "About",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Page-level actions (navigation buttons, hero CTAs, pricing cards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    SignIn,
    SignUp,
    GetStarted,
    WatchDemo,
    SelectPlan(String),
}

/// What a page action led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEffect {
    ModalOpened(AuthMode),
    ContactSales { plan: String },
    DemoRequested,
}

/// The landing page with its two interactive components.
pub struct LandingPage {
    player: TerminalPlayer,
    modal: CredentialModalController,
    authenticator: Arc<dyn Authenticator>,
    worker: AuthWorker,
    session: Option<Session>,
    notice: Option<String>,
}

impl LandingPage {
    pub fn new(
        script: Script,
        timing: PlaybackTiming,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let worker = AuthWorker::spawn(Arc::clone(&authenticator));
        Self {
            player: TerminalPlayer::new(script, timing),
            modal: CredentialModalController::new(),
            authenticator,
            worker,
            session: None,
            notice: None,
        }
    }

    /// Start the hero animation.
    pub fn mount(&mut self) {
        self.player.start();
    }

    /// Stop the hero animation and drop any pending submission.
    pub fn unmount(&mut self) {
        self.player.stop();
        self.modal.close();
    }

    /// Advance the hero terminal by one timer period.
    pub fn tick(&mut self) {
        self.player.tick();
    }

    pub fn player(&self) -> &TerminalPlayer {
        &self.player
    }

    pub fn modal(&self) -> &CredentialModalController {
        &self.modal
    }

    /// Last successful sign-in, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Transient message for the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Handle a page-level action.
    pub fn dispatch(&mut self, action: HostAction) -> HostEffect {
        match action {
            HostAction::SignIn => self.open_modal(AuthMode::SignIn),
            HostAction::SignUp | HostAction::GetStarted => self.open_modal(AuthMode::SignUp),
            HostAction::WatchDemo => {
                info!("watch demo requested");
                self.notice = Some("The demo video is on its way. Watch the terminal above.".into());
                HostEffect::DemoRequested
            }
            HostAction::SelectPlan(plan) => self.select_plan(&plan),
        }
    }

    /// Pricing card handler: enterprise goes to sales, anything else signs up.
    pub fn select_plan(&mut self, plan: &str) -> HostEffect {
        info!(plan, "plan selected");
        if plan == ENTERPRISE_PLAN {
            self.notice = Some("Our sales team will contact you: hello@blitzcoder.com".into());
            HostEffect::ContactSales {
                plan: plan.to_string(),
            }
        } else {
            self.open_modal(AuthMode::SignUp)
        }
    }

    fn open_modal(&mut self, mode: AuthMode) -> HostEffect {
        self.modal.open(mode);
        HostEffect::ModalOpened(mode)
    }

    /// Feed an event to the modal and run whatever it asks for.
    pub fn modal_event(&mut self, event: ModalEvent) {
        let commands = self.modal.dispatch(event);
        self.execute(commands);
    }

    pub fn type_char(&mut self, field: Field, ch: char) {
        self.modal.push_char(field, ch);
    }

    pub fn backspace(&mut self, field: Field) {
        self.modal.backspace(field);
    }

    fn execute(&mut self, commands: Vec<AuthCommand>) {
        for command in commands {
            match command {
                AuthCommand::Authenticate { token, request } => self.worker.submit(token, request),
                AuthCommand::StartOAuth { provider } => {
                    self.authenticator.start_oauth(provider);
                    self.notice = Some(format!("{}: redirecting...", provider.label()));
                }
                AuthCommand::SignedIn(session) => {
                    self.notice = Some(match session.mode {
                        AuthMode::SignIn => format!("Signed in as {}", session.email),
                        AuthMode::SignUp => format!("Account created for {}", session.email),
                    });
                    self.session = Some(session);
                }
            }
        }
    }

    /// Fold every ready authentication result into the modal.
    ///
    /// Returns how many results were applied (stale ones included).
    pub fn pump(&mut self) -> usize {
        let resolutions = self.worker.poll();
        let count = resolutions.len();
        for resolution in resolutions {
            self.modal_event(ModalEvent::Resolved {
                token: resolution.token,
                outcome: resolution.outcome,
            });
        }
        count
    }

    /// Block up to `timeout` for one authentication result and apply it.
    pub fn wait_for_resolution(&mut self, timeout: Duration) -> bool {
        match self.worker.wait(timeout) {
            Some(resolution) => {
                self.modal_event(ModalEvent::Resolved {
                    token: resolution.token,
                    outcome: resolution.outcome,
                });
                true
            }
            None => false,
        }
    }
}
