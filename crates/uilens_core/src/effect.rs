#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the trimmed URL to the analysis service.
    SubmitAnalysis {
        request_id: crate::RequestId,
        url: String,
    },
}
