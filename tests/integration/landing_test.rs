//! The landing page driven through the public library API with a real
//! background auth worker.

use std::sync::Arc;
use std::time::{Duration, Instant};

use blitz_landing::auth::{
    AuthError, AuthMode, AuthRequest, Authenticator, Field, ModalEvent, OAuthProvider, Session,
    SimulatedAuthenticator, Submission,
};
use blitz_landing::landing::{HostAction, HostEffect, LandingPage};
use blitz_landing::player::{PlaybackTiming, Script};

const WAIT: Duration = Duration::from_secs(5);

fn page_with_delay(delay: Duration) -> LandingPage {
    LandingPage::new(
        Script::new(["ab", "cd"]),
        PlaybackTiming::new(Duration::from_millis(100), Duration::from_millis(100)),
        Arc::new(SimulatedAuthenticator::new(delay)),
    )
}

fn fill(page: &mut LandingPage, email: &str, password: &str) {
    page.modal_event(ModalEvent::Edit {
        field: Field::Email,
        value: email.into(),
    });
    page.modal_event(ModalEvent::Edit {
        field: Field::Password,
        value: password.into(),
    });
}

#[test]
fn sign_in_completes_and_closes_modal() {
    let mut page = page_with_delay(Duration::from_millis(10));
    page.dispatch(HostAction::SignIn);
    fill(&mut page, "dev@blitz.io", "secret");
    page.modal_event(ModalEvent::Submit);
    assert!(page.modal().submission().is_in_flight());

    assert!(page.wait_for_resolution(WAIT));
    let state = page.modal().state();
    assert!(!state.is_open);
    assert_eq!(state.submission, Submission::Succeeded);
    assert!(state.fields.is_empty());
    assert_eq!(page.session().unwrap().email, "dev@blitz.io");
    assert_eq!(page.notice(), Some("Signed in as dev@blitz.io"));
}

#[test]
fn closing_during_submission_discards_result() {
    let mut page = page_with_delay(Duration::from_millis(50));
    page.dispatch(HostAction::SignIn);
    fill(&mut page, "dev@blitz.io", "secret");
    page.modal_event(ModalEvent::Submit);
    page.modal_event(ModalEvent::Close);
    let closed = page.modal().state().clone();

    // The worker still answers, but the answer is stale
    assert!(page.wait_for_resolution(WAIT));
    assert_eq!(page.modal().state(), &closed);
    assert_eq!(page.modal().submission(), &Submission::Idle);
    assert!(page.session().is_none());
}

#[test]
fn stale_result_does_not_resolve_newer_submission() {
    let mut page = page_with_delay(Duration::from_millis(100));
    page.dispatch(HostAction::SignIn);
    fill(&mut page, "first@blitz.io", "one");
    page.modal_event(ModalEvent::Submit);
    page.modal_event(ModalEvent::Close);

    page.dispatch(HostAction::SignIn);
    fill(&mut page, "second@blitz.io", "two");
    page.modal_event(ModalEvent::Submit);

    // Both answer in either order; only the second signs in
    assert!(page.wait_for_resolution(WAIT));
    assert!(page.wait_for_resolution(WAIT));
    assert_eq!(page.modal().submission(), &Submission::Succeeded);
    assert_eq!(page.session().unwrap().email, "second@blitz.io");
}

#[test]
fn resubmit_after_close_resolves_within_one_delay() {
    let delay = Duration::from_millis(500);
    let mut page = page_with_delay(delay);
    page.dispatch(HostAction::SignIn);
    fill(&mut page, "first@blitz.io", "one");
    page.modal_event(ModalEvent::Submit);
    page.modal_event(ModalEvent::Close);

    page.dispatch(HostAction::SignIn);
    fill(&mut page, "second@blitz.io", "two");
    let started = Instant::now();
    page.modal_event(ModalEvent::Submit);

    while page.modal().submission().is_in_flight() {
        assert!(page.wait_for_resolution(WAIT));
    }
    let took = started.elapsed();
    assert!(took < delay + delay / 2, "second submission took {:?}", took);
    assert_eq!(page.session().unwrap().email, "second@blitz.io");
}

#[test]
fn sign_up_mismatch_never_reaches_worker() {
    let mut page = page_with_delay(Duration::ZERO);
    page.dispatch(HostAction::GetStarted);
    fill(&mut page, "dev@blitz.io", "secret");
    page.modal_event(ModalEvent::Edit {
        field: Field::ConfirmPassword,
        value: "Secret".into(),
    });
    page.modal_event(ModalEvent::Submit);

    assert_eq!(
        page.modal().submission(),
        &Submission::Failed("Passwords do not match".into())
    );
    assert!(!page.wait_for_resolution(Duration::from_millis(50)));
}

struct Rejecting;

impl Authenticator for Rejecting {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    fn authenticate(&self, _request: &AuthRequest) -> Result<Session, AuthError> {
        Err(AuthError::Rejected)
    }

    fn start_oauth(&self, _provider: OAuthProvider) {}
}

#[test]
fn rejected_credentials_keep_modal_open_with_error() {
    let mut page = LandingPage::new(
        Script::hero(),
        PlaybackTiming::default(),
        Arc::new(Rejecting),
    );
    page.dispatch(HostAction::SignIn);
    fill(&mut page, "dev@blitz.io", "wrong");
    page.modal_event(ModalEvent::Submit);

    assert!(page.wait_for_resolution(WAIT));
    assert!(page.modal().is_open());
    assert_eq!(
        page.modal().submission().error_message(),
        Some("Authentication failed. Please try again.")
    );
    assert_eq!(page.modal().state().fields.email, "dev@blitz.io");
}

#[test]
fn pricing_routes_enterprise_to_sales() {
    let mut page = page_with_delay(Duration::ZERO);
    assert_eq!(
        page.dispatch(HostAction::SelectPlan("Enterprise".into())),
        HostEffect::ContactSales {
            plan: "Enterprise".into()
        }
    );
    assert_eq!(
        page.dispatch(HostAction::SelectPlan("Professional".into())),
        HostEffect::ModalOpened(AuthMode::SignUp)
    );
}

#[test]
fn hero_terminal_loops_while_mounted() {
    let mut page = page_with_delay(Duration::ZERO);
    page.mount();
    // (2 chars + 1 dwell tick) per line, two lines
    for _ in 0..6 {
        page.tick();
    }
    let state = page.player().state();
    assert_eq!(state.script_index, 0);
    assert_eq!(state.passes, 1);
    assert_eq!(page.player().typed_prefix(), "");

    page.unmount();
    page.tick();
    assert_eq!(page.player().typed_prefix(), "");
}
