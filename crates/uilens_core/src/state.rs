use crate::view_model::{PanelViewModel, SuggestionEntry};

pub type RequestId = u64;

/// Lifecycle of the results region. The outer container is visible in both
/// `Loading` and `ResultsShown`; only `ResultsShown` reveals the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    ResultsShown,
}

/// Analysis results as consumed by the panel, decoupled from the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisReport {
    pub detected_elements: Vec<String>,
    pub suggestions: Option<String>,
}

/// Terminal result of one submitted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Report(AnalysisReport),
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    input: String,
    phase: Phase,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    detected_elements: Vec<String>,
    suggestions: Vec<SuggestionEntry>,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            phase: self.phase,
            input: self.input.clone(),
            submit_enabled: self.submit_enabled(),
            results_visible: self.phase != Phase::Idle,
            loading_visible: self.phase == Phase::Loading,
            body_visible: self.phase == Phase::ResultsShown,
            detected_elements: self.detected_elements.clone(),
            suggestions: self.suggestions.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, resetting the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn submit_enabled(&self) -> bool {
        !self.input.trim().is_empty() && self.in_flight.is_none()
    }

    pub(crate) fn trimmed_input(&self) -> &str {
        self.input.trim()
    }

    pub(crate) fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// Allocates a request id and moves the panel into the loading phase.
    ///
    /// Prior rendered entries are kept; the hidden body still holds them
    /// until the next outcome replaces them.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.in_flight = Some(id);
        self.phase = Phase::Loading;
        self.mark_dirty();
        id
    }

    /// Applies a completion. Completions that do not match the in-flight
    /// request id are dropped.
    pub(crate) fn apply_outcome(&mut self, request_id: RequestId, outcome: AnalysisOutcome) {
        if self.in_flight != Some(request_id) {
            return;
        }
        match outcome {
            AnalysisOutcome::Report(report) => self.render_report(report),
            AnalysisOutcome::Failed { message } => self.render_failure(message),
        }
        self.finish_request();
    }

    fn render_report(&mut self, report: AnalysisReport) {
        self.clear_rendered();
        self.detected_elements = report.detected_elements;
        if let Some(text) = report.suggestions {
            self.suggestions.extend(
                suggestion_paragraphs(&text)
                    .into_iter()
                    .map(SuggestionEntry::Paragraph),
            );
        }
    }

    fn render_failure(&mut self, message: String) {
        self.clear_rendered();
        self.suggestions.push(SuggestionEntry::Error(message));
    }

    fn clear_rendered(&mut self) {
        self.detected_elements.clear();
        self.suggestions.clear();
    }

    /// Single exit path for a completed request: submit re-enabled, loading
    /// off, body revealed. Runs for success and failure alike.
    fn finish_request(&mut self) {
        self.in_flight = None;
        self.phase = Phase::ResultsShown;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Splits a suggestions block into displayable paragraphs: one per
/// newline-separated line, trimmed, blank lines dropped.
fn suggestion_paragraphs(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
