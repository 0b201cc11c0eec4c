use crate::Phase;

/// One rendered entry of the suggestions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    Paragraph(String),
    Error(String),
}

/// Snapshot of everything the render layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub phase: Phase,
    pub input: String,
    pub submit_enabled: bool,
    /// Outer results container: shown while loading and once results arrive.
    pub results_visible: bool,
    pub loading_visible: bool,
    /// Results body holding the element list and suggestions panel.
    pub body_visible: bool,
    pub detected_elements: Vec<String>,
    pub suggestions: Vec<SuggestionEntry>,
    pub dirty: bool,
}
