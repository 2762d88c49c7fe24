use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use repix_model::{
    DraftField, ImageRef, Notification, OutputFormat, Severity, SizePreset, SourceImage,
    SubmissionState,
};
use tokio::sync::watch;
use tracing::debug;

use crate::notify::NotificationManager;
use crate::saver::{ImageSaver, SaveError};
use crate::selection::{SelectionSnapshot, SelectionStore};
use crate::service::ResizeService;
use crate::submit::SubmissionOrchestrator;
use crate::validate::{ValidationFailure, validate};

/// What became of a submit intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAck {
    /// The selection validated; a submission is now in flight.
    Accepted,
    /// A submission was already in flight; this intent was dropped.
    AlreadyInFlight,
    /// The selection failed validation; nothing was sent.
    Rejected(ValidationFailure),
}

/// One user's resize workflow end to end: the selection being edited, the
/// submission lifecycle, and the live notification.
///
/// Presentation layers forward intents through the methods here and render
/// from the three watch channels. The session owns no rendering and no
/// platform I/O; saving goes through the injected [`ImageSaver`].
pub struct ResizeSession {
    selection: SelectionStore,
    orchestrator: SubmissionOrchestrator,
    notifier: NotificationManager,
    saver: Arc<dyn ImageSaver>,
}

impl ResizeSession {
    /// Wire a session to its collaborators.
    pub fn new(service: Arc<dyn ResizeService>, saver: Arc<dyn ImageSaver>) -> Self {
        let notifier = NotificationManager::new();
        Self {
            selection: SelectionStore::new(),
            orchestrator: SubmissionOrchestrator::new(service, notifier.clone()),
            notifier,
            saver,
        }
    }

    // Selection intents.

    /// The user picked a file; any earlier pick is replaced wholesale.
    pub fn set_source(&mut self, source: SourceImage) {
        self.selection.set_source(source);
    }

    pub fn toggle_preset(&mut self, preset: SizePreset) {
        self.selection.toggle_preset(preset);
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.selection.set_format(format);
    }

    pub fn set_custom_field(&mut self, index: usize, field: DraftField, value: impl Into<String>) {
        self.selection.set_custom_field(index, field, value);
    }

    pub fn add_custom_row(&mut self) {
        self.selection.add_custom_row();
    }

    pub fn remove_custom_row(&mut self, index: usize) {
        self.selection.remove_custom_row(index);
    }

    // Submission.

    /// Validate the current selection and, if it holds up, start the one
    /// allowed submission.
    ///
    /// A validation failure surfaces as an error notification with the
    /// failure's own wording and leaves the submission lifecycle
    /// untouched. The selection stays editable while the submission runs;
    /// later edits do not alter what was sent.
    pub fn submit(&self) -> SubmitAck {
        let snapshot = self.selection.snapshot();
        match validate(&snapshot) {
            Err(failure) => {
                debug!(%failure, "submit rejected by validation");
                self.notifier.notify(failure.to_string(), Severity::Error);
                SubmitAck::Rejected(failure)
            }
            Ok(request) => {
                if self.orchestrator.submit(request) {
                    SubmitAck::Accepted
                } else {
                    SubmitAck::AlreadyInFlight
                }
            }
        }
    }

    /// Save one produced image through the injected saver.
    pub async fn download(&self, image: &ImageRef) -> Result<PathBuf, SaveError> {
        self.saver.save(image).await
    }

    /// Drop the current notification ahead of its timer.
    pub fn dismiss_notification(&self) {
        self.notifier.dismiss();
    }

    // Read surface.

    pub fn selection(&self) -> SelectionSnapshot {
        self.selection.snapshot()
    }

    pub fn submission(&self) -> SubmissionState {
        self.orchestrator.state()
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    pub fn watch_selection(&self) -> watch::Receiver<SelectionSnapshot> {
        self.selection.subscribe()
    }

    pub fn watch_submission(&self) -> watch::Receiver<SubmissionState> {
        self.orchestrator.subscribe()
    }

    pub fn watch_notification(&self) -> watch::Receiver<Option<Notification>> {
        self.notifier.subscribe()
    }
}

impl fmt::Debug for ResizeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSession")
            .field("selection", &self.selection)
            .field("submission", &self.orchestrator)
            .finish()
    }
}
