use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use uploader_logging::uploader_warn;

use crate::{ExtractError, ExtractedFields, FailureKind, FileUpload};

/// Address of the extraction endpoint, fixed at build time.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/extract";

/// Text shown when the service rejects a document without saying why.
const SERVICE_FALLBACK: &str = "Failed to extract data";
/// Text shown for transport-level failures and unreadable responses.
const TRANSPORT_FALLBACK: &str = "Server Error";

#[derive(Debug, Clone)]
pub struct ExtractSettings {
    pub endpoint: String,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
pub trait ExtractionClient: Send + Sync {
    async fn extract(&self, file: FileUpload) -> Result<ExtractedFields, ExtractError>;
}

/// Response body of the extraction endpoint. Anything the service leaves
/// out defaults to empty rather than failing deserialization.
#[derive(Debug, Deserialize)]
struct ExtractResponse {
    success: bool,
    #[serde(default)]
    data: Option<ExtractData>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractData {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
}

#[derive(Debug, Clone)]
pub struct ReqwestExtractionClient {
    settings: ExtractSettings,
}

impl ReqwestExtractionClient {
    pub fn new(settings: ExtractSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ExtractError> {
        // No request or connect timeout is configured: a hung service keeps
        // the request outstanding until it resolves.
        reqwest::Client::builder().build().map_err(|err| {
            uploader_warn!("failed to build http client: {err}");
            ExtractError::new(FailureKind::Network, TRANSPORT_FALLBACK)
        })
    }

    fn build_form(&self, file: FileUpload) -> Result<multipart::Form, ExtractError> {
        let media_type = file.media_type;
        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&media_type)
            .map_err(|err| {
                uploader_warn!("unusable media type {media_type:?}: {err}");
                ExtractError::new(FailureKind::InvalidRequest, TRANSPORT_FALLBACK)
            })?;
        Ok(multipart::Form::new().part("file", part))
    }
}

#[async_trait]
impl ExtractionClient for ReqwestExtractionClient {
    async fn extract(&self, file: FileUpload) -> Result<ExtractedFields, ExtractError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint).map_err(|err| {
            uploader_warn!("unusable endpoint {:?}: {err}", self.settings.endpoint);
            ExtractError::new(FailureKind::InvalidRequest, TRANSPORT_FALLBACK)
        })?;
        let client = self.build_client()?;
        let form = self.build_form(file)?;

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            // The service reports failures as JSON even on error statuses;
            // its message is passed through when the body is readable.
            let message = serde_json::from_slice::<ExtractResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| TRANSPORT_FALLBACK.to_string());
            return Err(ExtractError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        match serde_json::from_slice::<ExtractResponse>(&body) {
            Ok(parsed) if parsed.success => {
                let data = parsed.data.unwrap_or_default();
                Ok(ExtractedFields {
                    name: data.name,
                    phone: data.phone,
                    address: data.address,
                })
            }
            Ok(parsed) => {
                let message = parsed
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| SERVICE_FALLBACK.to_string());
                Err(ExtractError::new(FailureKind::ServiceRejected, message))
            }
            Err(err) => {
                uploader_warn!("unreadable extraction response: {err}");
                Err(ExtractError::new(
                    FailureKind::MalformedResponse,
                    TRANSPORT_FALLBACK,
                ))
            }
        }
    }
}

fn map_transport_error(err: reqwest::Error) -> ExtractError {
    uploader_warn!("transport failure: {err}");
    ExtractError::new(FailureKind::Network, TRANSPORT_FALLBACK)
}
