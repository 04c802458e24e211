use std::sync::{mpsc, Arc};
use std::thread;

use crate::api::{ClientSettings, QueueApi, ReqwestQueueApi};
use crate::{ClientEvent, RequestSeq};

enum ClientCommand {
    FetchQueue { seq: RequestSeq },
    EnqueueSelf { catch_converts: bool },
}

/// Runs the async API on a background thread, bridged over std channels so
/// the caller's single-threaded loop never blocks on a network round trip.
///
/// Commands may complete out of order; every snapshot event echoes the `seq`
/// it was issued with so the caller can discard stale responses.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestQueueApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_queue(&self, seq: RequestSeq) {
        let _ = self.cmd_tx.send(ClientCommand::FetchQueue { seq });
    }

    pub fn enqueue_self(&self, catch_converts: bool) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::EnqueueSelf { catch_converts });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn QueueApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::FetchQueue { seq } => {
            let result = api.fetch_queue().await;
            let _ = event_tx.send(ClientEvent::SnapshotLoaded { seq, result });
        }
        ClientCommand::EnqueueSelf { catch_converts } => {
            let result = api.enqueue_self(catch_converts).await;
            let _ = event_tx.send(ClientEvent::EnqueueCompleted { result });
        }
    }
}
