use crate::{Effect, Msg, PanelState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Empty trimmed input is a no-op, not an error. A submission
            // while one is outstanding is also ignored.
            if state.trimmed_input().is_empty() || state.in_flight().is_some() {
                return (state, Vec::new());
            }
            let url = state.trimmed_input().to_owned();
            let request_id = state.begin_request();
            vec![Effect::SubmitAnalysis { request_id, url }]
        }
        Msg::AnalysisCompleted {
            request_id,
            outcome,
        } => {
            state.apply_outcome(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
