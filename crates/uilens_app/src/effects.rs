use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use panel_logging::{panel_info, panel_warn};
use uilens_client::{AnalysisResponse, ClientEvent, ClientHandle, ClientSettings};
use uilens_core::{AnalysisOutcome, AnalysisReport, Effect, Msg};

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let client = ClientHandle::new(settings);
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis { request_id, url } => {
                    panel_info!("SubmitAnalysis request_id={} url={}", request_id, url);
                    self.client.submit(request_id, url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let ClientEvent { request_id, result } = event;
                let outcome = match result {
                    Ok(response) => AnalysisOutcome::Report(map_report(response)),
                    Err(err) => {
                        panel_warn!("Request {} failed ({}): {}", request_id, err.kind, err);
                        AnalysisOutcome::Failed {
                            message: err.message,
                        }
                    }
                };
                let _ = msg_tx.send(Msg::AnalysisCompleted {
                    request_id,
                    outcome,
                });
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_report(response: AnalysisResponse) -> AnalysisReport {
    AnalysisReport {
        detected_elements: response.predictions.unwrap_or_default(),
        suggestions: response.analysis.and_then(|section| section.suggestions),
    }
}
