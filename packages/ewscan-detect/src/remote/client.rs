use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::engine::{AnalysisInput, AnalysisResponse, DetectError, DetectionEngine, HazardInfo};

/// Endpoint of a locally running classification backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Error body shape of the classification backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// HTTP client for the e-waste classification API.
///
/// One POST per analysis, one GET per hazard lookup. No retry and no
/// cancellation; a request that fails is terminal for that render pass.
pub struct RemoteEngine {
    client: Client,
    base: Url,
}

impl RemoteEngine {
    pub fn new(api_base: &str) -> Result<Self, DetectError> {
        let base = Url::parse(api_base.trim_end_matches('/')).map_err(|e| {
            DetectError::InvalidInput(format!("invalid api base '{}': {}", api_base, e))
        })?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DetectError::Connection(e.to_string()))?;
        Ok(Self { client, base })
    }

    /// Checks whether the backend answers on its root endpoint.
    pub async fn health_check(&self) -> bool {
        match self.client.get(self.base.clone()).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, DetectError> {
        let mut url = self.base.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|_| {
                DetectError::InvalidInput(format!("api base '{}' cannot carry a path", self.base))
            })?;
            // push() percent-encodes each segment, so multi-word class
            // names like "lcd monitor" stay one segment
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    async fn input_bytes(&self, input: &AnalysisInput) -> Result<Vec<u8>, DetectError> {
        let bytes = match input {
            AnalysisInput::FilePath(path) => tokio::fs::read(path).await.map_err(|e| {
                DetectError::InvalidInput(format!("failed to read {}: {}", path.display(), e))
            })?,
            AnalysisInput::Bytes(data) => data.clone(),
        };
        if bytes.is_empty() {
            return Err(DetectError::NoImage);
        }
        Ok(bytes)
    }
}

/// Maps a non-success response to an API error, surfacing the server's
/// `detail` field when the error body carries one.
async fn api_error(response: reqwest::Response) -> DetectError {
    let status = response.status().as_u16();
    let detail = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { detail: Some(detail) }) => detail,
        _ => format!("HTTP error! status: {}", status),
    };
    DetectError::Api { status, detail }
}

#[async_trait]
impl DetectionEngine for RemoteEngine {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResponse, DetectError> {
        let bytes = self.input_bytes(input).await?;
        // base64 without a data-URI prefix, as the backend expects
        let body = serde_json::json!({ "image": STANDARD.encode(&bytes) });

        let url = self.endpoint(&["predict_ewaste"])?;
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DetectError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<AnalysisResponse>()
            .await
            .map_err(|e| DetectError::InvalidInput(format!("malformed response: {}", e)))
    }

    async fn hazards(&self, ewaste_type: &str) -> Result<HazardInfo, DetectError> {
        let url = self.endpoint(&["hazards", ewaste_type])?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DetectError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<HazardInfo>()
            .await
            .map_err(|e| DetectError::InvalidInput(format!("malformed response: {}", e)))
    }
}
