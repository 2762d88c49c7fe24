use std::sync::Arc;

use crate::format::OutputFormat;
use crate::source::SourceImage;
use crate::target::TargetSet;

/// A validated, submittable request.
///
/// Only validation produces one: the source is always present and the
/// target set is non-empty by construction, so the submission path and
/// service implementations never re-check either. The source rides behind
/// `Arc`; cloning a request does not copy image bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequest {
    pub source: Arc<SourceImage>,
    pub format: OutputFormat,
    pub targets: TargetSet,
}

impl ResizeRequest {
    pub fn new(source: Arc<SourceImage>, format: OutputFormat, targets: TargetSet) -> Self {
        Self {
            source,
            format,
            targets,
        }
    }
}
