//! Uilens core: pure state machine and view-model helpers for the request panel.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AnalysisOutcome, AnalysisReport, PanelState, Phase, RequestId};
pub use update::update;
pub use view_model::{PanelViewModel, SuggestionEntry};
