#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input field (full field text).
    InputChanged(String),
    /// User activated the submit control.
    SubmitClicked,
    /// Client completion for an outstanding analysis request.
    AnalysisCompleted {
        request_id: crate::RequestId,
        outcome: crate::AnalysisOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
