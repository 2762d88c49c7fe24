use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use repix_model::ImageRef;
use thiserror::Error;
use tracing::debug;

/// Why an image reference could not be materialized on disk.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The reference is not something this saver knows how to fetch.
    #[error("unsupported image reference: {0}")]
    UnsupportedReference(String),

    /// The data-URI payload was not valid base64.
    #[error("invalid image payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where produced images land when the user asks to keep one.
///
/// The orchestration side only ever calls this trait; what "saving" means
/// belongs to the embedding application.
#[async_trait]
pub trait ImageSaver: Send + Sync {
    /// Persist the referenced image, returning where it landed.
    async fn save(&self, image: &ImageRef) -> Result<PathBuf, SaveError>;
}

/// Writes `data:` URIs to files under a fixed directory, named by the
/// reference's suggested download name.
#[derive(Debug, Clone)]
pub struct DiskImageSaver {
    out_dir: PathBuf,
}

impl DiskImageSaver {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl ImageSaver for DiskImageSaver {
    async fn save(&self, image: &ImageRef) -> Result<PathBuf, SaveError> {
        let bytes = decode_data_uri(&image.uri)?;
        tokio::fs::create_dir_all(&self.out_dir).await?;
        let path = self.out_dir.join(safe_file_name(&image.download_name));
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "saved image");
        Ok(path)
    }
}

/// Extract and decode the payload of a `data:<mime>;base64,<payload>` URI.
fn decode_data_uri(uri: &str) -> Result<Vec<u8>, SaveError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| SaveError::UnsupportedReference(reference_summary(uri)))?;
    let (_mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| SaveError::UnsupportedReference(reference_summary(uri)))?;
    Ok(BASE64.decode(payload)?)
}

/// Error text keeps a short prefix of the reference; payloads can be
/// megabytes long.
fn reference_summary(uri: &str) -> String {
    uri.chars().take(48).collect()
}

/// Use only the final path component so a hostile download name cannot
/// escape the target directory.
fn safe_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|component| component.to_str())
        .unwrap_or("download")
        .to_string()
}
