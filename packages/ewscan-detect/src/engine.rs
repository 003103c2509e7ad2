use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::Detection;

/// Sentinel class name the backend reports when nothing in the image is
/// e-waste.
pub const NO_EWASTE_SENTINEL: &str = "no e-waste detected";

/// Lookup key for the fallback hazard fetch when nothing was detected. The
/// backend lowercases it on its side.
pub const NO_EWASTE_LOOKUP_KEY: &str = "No E-Waste Detected";

#[derive(Debug, Clone)]
pub enum AnalysisInput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
}

/// Response of one classification request.
///
/// Owned by the render step only; every new analysis replaces the previous
/// response. Fields the backend omits deserialize as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ewaste_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ewaste_info: Option<HazardInfo>,
    #[serde(default)]
    pub detections: Vec<Detection>,
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// The primary type when the backend identified one, filtering out the
    /// "no e-waste detected" sentinel it reports otherwise.
    pub fn identified_type(&self) -> Option<&str> {
        self.primary_ewaste_type
            .as_deref()
            .filter(|t| *t != NO_EWASTE_SENTINEL)
    }
}

/// Hazard information for an e-waste type.
///
/// Backends differ in shape: some return a single `hazards` string, the
/// reference classifier returns `materials`/`details`/`hazard_level`. All
/// fields are optional so either payload parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HazardInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ewaste_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazards: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_level: Option<u8>,
}

impl HazardInfo {
    /// Hazard text to render, whichever field the backend filled in.
    pub fn summary(&self) -> Option<&str> {
        self.hazards.as_deref().or(self.details.as_deref())
    }
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("no image selected")]
    NoImage,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Non-success HTTP status. `detail` carries the server-provided message
    /// when the error body had one, else a generic status-code message.
    #[error("{detail}")]
    Api { status: u16, detail: String },
    #[error("connection failed: {0}")]
    Connection(String),
}

#[async_trait]
pub trait DetectionEngine: Send + Sync {
    /// Submits one image for classification.
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResponse, DetectError>;

    /// Looks up hazard information for an e-waste type.
    async fn hazards(&self, ewaste_type: &str) -> Result<HazardInfo, DetectError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_minimal_payload() {
        let resp: AnalysisResponse =
            serde_json::from_str(r#"{"status":"success","detections":[]}"#).unwrap();
        assert!(resp.is_success());
        assert!(resp.identified_type().is_none());
        assert!(resp.detections.is_empty());
    }

    #[test]
    fn test_sentinel_type_is_not_identified() {
        let resp: AnalysisResponse = serde_json::from_str(
            r#"{"status":"success","primary_ewaste_type":"no e-waste detected","detections":[]}"#,
        )
        .unwrap();
        assert!(resp.identified_type().is_none());
    }

    #[test]
    fn test_hazard_info_accepts_both_shapes() {
        let simple: HazardInfo = serde_json::from_str(r#"{"hazards":"Contains lead."}"#).unwrap();
        assert_eq!(simple.summary(), Some("Contains lead."));

        let rich: HazardInfo = serde_json::from_str(
            r#"{"ewaste_type":"battery","materials":"Lithium, Lead","details":"Fire risk.","hazard_level":5}"#,
        )
        .unwrap();
        assert_eq!(rich.summary(), Some("Fire risk."));
        assert_eq!(rich.hazard_level, Some(5));
    }
}
