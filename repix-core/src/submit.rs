use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use repix_model::{ResizeRequest, Severity, SubmissionState};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::notify::NotificationManager;
use crate::service::ResizeService;

/// The one user-facing message every submission failure collapses into.
/// Causes stay in the logs.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Upload failed, please try again.";

/// Drives the submission lifecycle and guarantees at most one in-flight
/// submission.
///
/// Handles are cheap to clone and share one lifecycle channel. The
/// `Submitting` transition in [`SubmissionOrchestrator::submit`] happens
/// synchronously inside the channel lock, before any async work, so two
/// racing submit calls cannot both reach the service.
#[derive(Clone)]
pub struct SubmissionOrchestrator {
    service: Arc<dyn ResizeService>,
    notifier: NotificationManager,
    state: Arc<watch::Sender<SubmissionState>>,
}

impl SubmissionOrchestrator {
    pub fn new(service: Arc<dyn ResizeService>, notifier: NotificationManager) -> Self {
        Self {
            service,
            notifier,
            state: Arc::new(watch::Sender::new(SubmissionState::Idle)),
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Watch the lifecycle. Receivers observe `Submitting` and then the
    /// settled outcome of each accepted submission.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Start one submission, returning `false` untouched if another is
    /// already in flight.
    ///
    /// On failure of any kind the state settles as `Failed` with
    /// [`SUBMISSION_FAILED_MESSAGE`] and exactly one error notification is
    /// raised; the cause is logged, never shown. Must be called inside a
    /// Tokio runtime.
    pub fn submit(&self, request: ResizeRequest) -> bool {
        let entered = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                false
            } else {
                *state = SubmissionState::Submitting;
                true
            }
        });
        if !entered {
            debug!("submission already in flight, dropping submit");
            return false;
        }

        info!(
            file = %request.source.file_name,
            size = request.source.size_bytes(),
            targets = request.targets.len(),
            format = %request.format,
            "starting resize submission"
        );
        let orchestrator = self.clone();
        tokio::spawn(async move { orchestrator.drive(request).await });
        true
    }

    async fn drive(&self, request: ResizeRequest) {
        match self.service.resize(&request).await {
            Ok(results) => {
                info!(variants = results.variant_count(), "resize submission succeeded");
                self.state.send_replace(SubmissionState::Succeeded(results));
            }
            Err(cause) => {
                error!(%cause, "resize submission failed");
                self.state.send_replace(SubmissionState::Failed {
                    message: SUBMISSION_FAILED_MESSAGE.to_string(),
                });
                self.notifier.notify(SUBMISSION_FAILED_MESSAGE, Severity::Error);
            }
        }
    }
}

impl fmt::Debug for SubmissionOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionOrchestrator")
            .field("service", &type_name_of_val(self.service.as_ref()))
            .field("state", &*self.state.borrow())
            .finish()
    }
}
