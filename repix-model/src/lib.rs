//! Core data model definitions shared across repix crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod draft;
pub mod format;
pub mod notification;
pub mod preset;
pub mod request;
pub mod results;
pub mod source;
pub mod submission;
pub mod target;

// Intentionally curated re-exports for downstream consumers.
pub use draft::{DraftField, SizeDraftRow};
pub use format::OutputFormat;
pub use notification::{Notification, Severity};
pub use preset::SizePreset;
pub use request::ResizeRequest;
pub use results::{ImageRef, ResultSet};
pub use source::SourceImage;
pub use submission::SubmissionState;
pub use target::{ResizeTarget, TargetSet};
