use repix_model::{ResizeRequest, ResizeTarget, TargetSet};
use thiserror::Error;

use crate::selection::SelectionSnapshot;

/// Why a selection cannot become a request.
///
/// `Display` is the exact wording shown to the user. Validation failures
/// never leave the client; nothing here reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Please upload an image.")]
    NoFileSelected,
    #[error("Please select a preset or add a custom size.")]
    NoTargetsSpecified,
}

/// Turn the current selection into a submittable request.
///
/// Checked in order: a file must be chosen, then at least one target must
/// survive. Custom rows that fail to parse are dropped silently rather
/// than reported; the surviving rows join the chosen presets, in selection
/// order, deduplicated.
pub fn validate(snapshot: &SelectionSnapshot) -> Result<ResizeRequest, ValidationFailure> {
    let source = snapshot
        .source
        .clone()
        .ok_or(ValidationFailure::NoFileSelected)?;

    let candidates = snapshot
        .presets
        .iter()
        .copied()
        .map(ResizeTarget::Preset)
        .chain(snapshot.custom_rows.iter().filter_map(|row| row.parse_target()));
    let targets =
        TargetSet::from_targets(candidates).ok_or(ValidationFailure::NoTargetsSpecified)?;

    Ok(ResizeRequest::new(source, snapshot.format, targets))
}
