//! Background worker for credential submissions
//!
//! Keeps the UI loop from blocking on the simulated network delay. Every
//! submission runs on its own short-lived thread, so one that was abandoned
//! never holds up the next. Results travel back over a channel, tagged with
//! the submission token they answer.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::authenticator::{AuthRequest, Authenticator, Session};
use super::error::AuthError;
use super::state::SubmissionToken;

/// One queued submission.
#[derive(Debug)]
pub struct AuthJob {
    pub token: SubmissionToken,
    pub request: AuthRequest,
}

/// Answer for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub token: SubmissionToken,
    pub outcome: Result<Session, AuthError>,
}

/// Worker loop that dispatches queued jobs.
///
/// Receives jobs from `job_rx` and starts one thread per job that calls
/// `authenticator` and sends a `Resolution` back via `result_tx`. Exits when
/// the job channel is closed (all senders dropped); jobs already started
/// still deliver their results.
pub fn worker_loop(
    job_rx: Receiver<AuthJob>,
    result_tx: Sender<Resolution>,
    authenticator: Arc<dyn Authenticator>,
) {
    while let Ok(job) = job_rx.recv() {
        let token = job.token;
        let job_tx = result_tx.clone();
        let job_auth = Arc::clone(&authenticator);
        let spawned = thread::Builder::new()
            .name(format!("auth-{}", token))
            .spawn(move || {
                debug!(%token, backend = job_auth.name(), "authenticating");
                let outcome = job_auth.authenticate(&job.request);
                // Ignore send errors (main thread may have exited)
                let _ = job_tx.send(Resolution { token, outcome });
            });
        if let Err(e) = spawned {
            warn!(%token, error = %e, "failed to start authentication");
            let _ = result_tx.send(Resolution {
                token,
                outcome: Err(AuthError::Unavailable),
            });
        }
    }
}

/// Handle to the auth worker thread.
///
/// Dropping the handle closes the job channel and the dispatcher exits.
/// Neither it nor the per-job threads are joined, so quitting the page does
/// not wait out a pending simulated delay.
pub struct AuthWorker {
    job_tx: Sender<AuthJob>,
    result_tx: Sender<Resolution>,
    result_rx: Receiver<Resolution>,
}

impl AuthWorker {
    /// Spawn the worker thread.
    pub fn spawn(authenticator: Arc<dyn Authenticator>) -> Self {
        let (job_tx, job_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        let worker_tx = result_tx.clone();
        if let Err(e) = thread::Builder::new()
            .name("auth-worker".into())
            .spawn(move || worker_loop(job_rx, worker_tx, authenticator))
        {
            warn!(error = %e, "failed to spawn auth worker");
        }

        Self {
            job_tx,
            result_tx,
            result_rx,
        }
    }

    /// Queue a submission.
    ///
    /// If the worker thread is gone the submission resolves with
    /// `AuthError::Unavailable` on the next poll.
    pub fn submit(&self, token: SubmissionToken, request: AuthRequest) {
        if self.job_tx.send(AuthJob { token, request }).is_err() {
            warn!(%token, "auth worker unavailable");
            let _ = self.result_tx.send(Resolution {
                token,
                outcome: Err(AuthError::Unavailable),
            });
        }
    }

    /// Drain all resolutions that are ready, without blocking.
    pub fn poll(&self) -> Vec<Resolution> {
        self.result_rx.try_iter().collect()
    }

    /// Block until the next resolution arrives or `timeout` passes.
    pub fn wait(&self, timeout: Duration) -> Option<Resolution> {
        self.result_rx.recv_timeout(timeout).ok()
    }
}
