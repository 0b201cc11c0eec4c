use std::time::Duration;

use crate::types::{
    AnalysisRequest, AnalysisResponse, AnalyzeError, ErrorBody, FailureKind, GENERIC_FAILURE,
};

/// Connection settings for the analysis service.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the service, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<AnalysisResponse, AnalyzeError>;
}

#[derive(Debug, Clone)]
pub struct HttpAnalysisBackend {
    settings: ClientSettings,
}

impl HttpAnalysisBackend {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        // No request timeout: the call rides the transport's own defaults.
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self) -> String {
        format!("{}/analyze", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl AnalysisBackend for HttpAnalysisBackend {
    async fn analyze(&self, url: &str) -> Result<AnalysisResponse, AnalyzeError> {
        let client = self.build_client()?;
        let request = AnalysisRequest {
            url: url.to_owned(),
        };

        let response = client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzeError::new(
                FailureKind::HttpStatus(status.as_u16()),
                failure_message(&body),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AnalyzeError::new(FailureKind::Network, err.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|err| AnalyzeError::new(FailureKind::MalformedResponse, err.to_string()))
    }
}

/// Error message for a failure response: the body's `detail` field when
/// present, otherwise the generic fallback (empty and unparsable bodies
/// included).
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}
