use std::collections::BTreeMap;

use async_trait::async_trait;
use repix_model::{ResizeRequest, ResultSet};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::{ResizeService, ServiceError};

/// Wire shape of one entry in the `customSizes` field.
#[derive(Debug, Serialize)]
struct CustomSizePayload {
    width: u32,
    height: u32,
}

/// Wire shape of a successful `/upload` reply.
#[derive(Debug, Deserialize)]
struct UploadReply {
    original: String,
    filename: String,
    resized: BTreeMap<String, String>,
}

/// HTTP implementation of [`ResizeService`].
///
/// Posts the submission as one multipart form to `{base}/upload`:
/// the `file` part carries the image bytes, `format` the requested MIME
/// type, `sizes` a JSON array of preset names and `customSizes` a JSON
/// array of `{width, height}` pairs. Empty target lists are omitted from
/// the form entirely rather than sent as `[]`.
#[derive(Debug, Clone)]
pub struct HttpResizeService {
    client: Client,
    base_url: Url,
}

impl HttpResizeService {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url.as_str().trim_end_matches('/'))
    }

    fn build_form(&self, request: &ResizeRequest) -> Result<Form, ServiceError> {
        let file = Part::bytes(request.source.bytes.clone())
            .file_name(request.source.file_name.clone());
        let mut form = Form::new()
            .part("file", file)
            .text("format", request.format.mime());

        let presets = request.targets.presets();
        if !presets.is_empty() {
            let encoded = serde_json::to_string(&presets)
                .map_err(|source| ServiceError::Encode { source })?;
            form = form.text("sizes", encoded);
        }

        let custom: Vec<CustomSizePayload> = request
            .targets
            .custom_dimensions()
            .into_iter()
            .map(|(width, height)| CustomSizePayload { width, height })
            .collect();
        if !custom.is_empty() {
            let encoded = serde_json::to_string(&custom)
                .map_err(|source| ServiceError::Encode { source })?;
            form = form.text("customSizes", encoded);
        }

        Ok(form)
    }
}

#[async_trait]
impl ResizeService for HttpResizeService {
    async fn resize(&self, request: &ResizeRequest) -> Result<ResultSet, ServiceError> {
        let url = self.upload_url();
        debug!(
            %url,
            file = %request.source.file_name,
            targets = request.targets.len(),
            "posting resize request"
        );

        let response = self
            .client
            .post(&url)
            .multipart(self.build_form(request)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status, body });
        }

        let body = response.text().await?;
        let reply: UploadReply = serde_json::from_str(&body)
            .map_err(|source| ServiceError::MalformedReply { source })?;

        Ok(ResultSet::from_reply(
            reply.original,
            &reply.filename,
            reply.resized,
        ))
    }
}
