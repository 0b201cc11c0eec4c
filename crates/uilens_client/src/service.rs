use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::backend::{AnalysisBackend, ClientSettings, HttpAnalysisBackend};
use crate::types::{ClientEvent, RequestId};

enum ClientCommand {
    Submit { request_id: RequestId, url: String },
}

/// Handle to the background request loop: submissions go in over a command
/// channel and completions come back as [`ClientEvent`]s.
///
/// The panel guard keeps one logical request in flight at a time; the handle
/// itself imposes no ordering.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let backend = Arc::new(HttpAnalysisBackend::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    backend: &dyn AnalysisBackend,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit { request_id, url } => {
            let result = backend.analyze(&url).await;
            let _ = event_tx.send(ClientEvent { request_id, result });
        }
    }
}
