//! Uilens client: analysis-service IO and effect execution.
mod backend;
mod service;
mod types;

pub use backend::{AnalysisBackend, ClientSettings, HttpAnalysisBackend};
pub use service::ClientHandle;
pub use types::{
    AnalysisRequest, AnalysisResponse, AnalysisSection, AnalyzeError, ClientEvent, FailureKind,
    RequestId, GENERIC_FAILURE,
};
