use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestId = u64;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Success payload returned by the analysis service. Both sections are
/// optional; the panel renders nothing for an absent one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub predictions: Option<Vec<String>>,
    #[serde(default)]
    pub analysis: Option<AnalysisSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AnalysisSection {
    /// Newline-separated suggestion text.
    #[serde(default)]
    pub suggestions: Option<String>,
}

/// Failure payload: the service reports errors as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Fallback message when a failure response carries no usable detail.
pub const GENERIC_FAILURE: &str = "Analysis failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Coarse failure classification for logs and tests. The panel only ever
/// sees the message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Network,
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

/// Completion of one submitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEvent {
    pub request_id: RequestId,
    pub result: Result<AnalysisResponse, AnalyzeError>,
}
