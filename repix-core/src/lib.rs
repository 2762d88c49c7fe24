//! # Repix Core
//!
//! Client-side orchestration for the repix image resize service: selection
//! state, validation, the single-flight submission lifecycle, and timed
//! notifications.
//!
//! ## Overview
//!
//! `repix-core` is everything an image resize front end needs short of
//! rendering:
//!
//! - **Selection**: [`SelectionStore`] holds the chosen file, presets,
//!   free-text custom size rows and output format, publishing a snapshot
//!   after every edit
//! - **Validation**: [`validate`] turns a snapshot into a
//!   [`ResizeRequest`](repix_model::ResizeRequest) or says, in user
//!   wording, why it cannot
//! - **Submission**: [`SubmissionOrchestrator`] drives the one allowed
//!   in-flight submission and settles it as succeeded or failed
//! - **Notifications**: [`NotificationManager`] shows one transient
//!   message at a time and expires it on a timer
//! - **Collaborators**: [`ResizeService`] and [`ImageSaver`] are the seams
//!   to the network and the platform; [`HttpResizeService`] and
//!   [`DiskImageSaver`] are the stock implementations
//!
//! [`ResizeSession`] ties the pieces together behind one facade.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use repix_core::{ClientConfig, DiskImageSaver, HttpResizeService, ResizeSession};
//! use repix_core::model::{SizePreset, SourceImage};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load();
//! let service = HttpResizeService::new(config.service_url()?);
//! let mut session = ResizeSession::new(Arc::new(service), Arc::new(DiskImageSaver::new("out")));
//!
//! session.set_source(SourceImage::new("photo.jpg", std::fs::read("photo.jpg")?));
//! session.toggle_preset(SizePreset::Thumbnail);
//!
//! let mut submission = session.watch_submission();
//! session.submit();
//! let settled = submission.wait_for(|state| state.is_settled()).await?;
//! println!("{:?}", *settled);
//! # Ok(())
//! # }
//! ```
#![allow(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod notify;
pub mod saver;
pub mod selection;
pub mod service;
pub mod session;
pub mod submit;
pub mod validate;

pub use repix_model as model;

pub use config::{ClientConfig, SERVICE_URL_ENV};
pub use notify::{DEFAULT_NOTIFICATION_TTL, NotificationManager};
pub use saver::{DiskImageSaver, ImageSaver, SaveError};
pub use selection::{SelectionSnapshot, SelectionStore};
pub use service::{HttpResizeService, ResizeService, ServiceError};
pub use session::{ResizeSession, SubmitAck};
pub use submit::{SUBMISSION_FAILED_MESSAGE, SubmissionOrchestrator};
pub use validate::{ValidationFailure, validate};
