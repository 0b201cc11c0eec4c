use std::sync::Once;

use uilens_core::{
    update, AnalysisOutcome, AnalysisReport, Msg, PanelState, Phase, SuggestionEntry,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn submit(state: PanelState, input: &str) -> PanelState {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    state
}

fn complete(state: PanelState, request_id: u64, outcome: AnalysisOutcome) -> PanelState {
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id,
            outcome,
        },
    );
    state
}

fn report(elements: &[&str], suggestions: Option<&str>) -> AnalysisOutcome {
    AnalysisOutcome::Report(AnalysisReport {
        detected_elements: elements.iter().map(ToString::to_string).collect(),
        suggestions: suggestions.map(ToOwned::to_owned),
    })
}

#[test]
fn elements_render_in_response_order() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(state, 1, report(&["login form", "navbar"], None));
    let view = state.view();

    assert_eq!(
        view.detected_elements,
        vec!["login form".to_string(), "navbar".to_string()]
    );
    assert!(view.suggestions.is_empty());
}

#[test]
fn suggestions_split_on_newlines_dropping_blank_lines() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(
        state,
        1,
        report(&[], Some("Use alt text.\n\nAdd labels.\n  \n")),
    );
    let view = state.view();

    assert!(view.detected_elements.is_empty());
    assert_eq!(
        view.suggestions,
        vec![
            SuggestionEntry::Paragraph("Use alt text.".to_string()),
            SuggestionEntry::Paragraph("Add labels.".to_string()),
        ]
    );
}

#[test]
fn absent_sections_render_nothing() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(state, 1, report(&[], None));
    let view = state.view();

    assert_eq!(view.phase, Phase::ResultsShown);
    assert!(view.detected_elements.is_empty());
    assert!(view.suggestions.is_empty());
}

#[test]
fn failure_renders_single_error_entry() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(
        state,
        1,
        AnalysisOutcome::Failed {
            message: "invalid URL".to_string(),
        },
    );
    let view = state.view();

    assert!(view.detected_elements.is_empty());
    assert_eq!(
        view.suggestions,
        vec![SuggestionEntry::Error("invalid URL".to_string())]
    );
}

#[test]
fn error_after_success_leaves_no_residue() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(
        state,
        1,
        report(&["header"], Some("Improve contrast.")),
    );

    let state = submit(state, "https://example.com/other");
    let state = complete(
        state,
        2,
        AnalysisOutcome::Failed {
            message: "Analysis failed".to_string(),
        },
    );
    let view = state.view();

    assert!(view.detected_elements.is_empty());
    assert_eq!(
        view.suggestions,
        vec![SuggestionEntry::Error("Analysis failed".to_string())]
    );
}

#[test]
fn success_after_error_leaves_no_residue() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(
        state,
        1,
        AnalysisOutcome::Failed {
            message: "boom".to_string(),
        },
    );

    let state = submit(state, "https://example.com");
    let state = complete(state, 2, report(&["navbar"], None));
    let view = state.view();

    assert_eq!(view.detected_elements, vec!["navbar".to_string()]);
    assert_eq!(view.suggestions, Vec::<SuggestionEntry>::new());
}

#[test]
fn prior_entries_survive_loading_behind_hidden_body() {
    init_logging();
    let state = submit(PanelState::new(), "https://example.com");
    let state = complete(state, 1, report(&["header"], None));

    // Resubmitting hides the body but does not clear it; clearing happens
    // when the next outcome is applied.
    let state = submit(state, "https://example.com");
    let view = state.view();

    assert!(view.loading_visible);
    assert!(!view.body_visible);
    assert_eq!(view.detected_elements, vec!["header".to_string()]);
}

#[test]
fn full_analyze_flow() {
    init_logging();
    let state = PanelState::new();
    let (state, _) = update(state, Msg::InputChanged("example.com".to_string()));
    assert!(state.view().submit_enabled);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    assert!(state.view().loading_visible);

    let state = complete(
        state,
        1,
        report(&["header"], Some("Improve contrast.")),
    );
    let view = state.view();

    assert_eq!(view.detected_elements, vec!["header".to_string()]);
    assert_eq!(
        view.suggestions,
        vec![SuggestionEntry::Paragraph("Improve contrast.".to_string())]
    );
    assert!(!view.loading_visible);
    assert!(view.body_visible);
    assert!(view.submit_enabled);
}
