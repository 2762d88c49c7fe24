use crate::results::ResultSet;

/// Lifecycle of the one allowed in-flight submission.
///
/// `Submitting` is the guard: a submit intent arriving while it holds is
/// dropped before any work starts. A later submission replaces a settled
/// outcome wholesale; only the latest one is retained.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(ResultSet),
    Failed { message: String },
}

impl SubmissionState {
    pub const fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Whether a submission has finished, either way.
    pub const fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed { .. }
        )
    }

    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            SubmissionState::Succeeded(results) => Some(results),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
