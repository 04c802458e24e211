use board_logging::{board_debug, board_info, board_warn};
use queueboard_client::{ClientEvent, ClientHandle, ClientSettings};
use queueboard_core::{Effect, FetchOutcome, Msg, SubmitOutcome};

use crate::settings::Settings;

/// Bridges core effects to the HTTP client and client events back to
/// messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: &Settings) -> Self {
        let client = ClientHandle::new(ClientSettings {
            base_url: settings.base_url.clone(),
            ..ClientSettings::default()
        });
        Self { client }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchQueue { seq } => {
                    board_debug!("FetchQueue seq={}", seq);
                    self.client.fetch_queue(seq);
                }
                Effect::EnqueueSelf { catch_converts } => {
                    board_info!("EnqueueSelf catch_converts={}", catch_converts);
                    self.client.enqueue_self(catch_converts);
                }
                Effect::Notify { message } => {
                    // Headless stand-in for the page's blocking alert.
                    board_info!("queue notice: {}", message);
                }
            }
        }
    }

    /// Drain one completed client round trip, if any.
    pub fn poll_event(&self) -> Option<Msg> {
        self.client.try_recv().map(map_event)
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::SnapshotLoaded { seq, result } => Msg::SnapshotLoaded {
            seq,
            outcome: match result {
                Ok(snapshot) => FetchOutcome::Loaded(map_snapshot(snapshot)),
                Err(err) => {
                    board_warn!("queue fetch {} failed: {}", seq, err.kind);
                    FetchOutcome::Failed
                }
            },
        },
        ClientEvent::EnqueueCompleted { result } => Msg::SubmitCompleted {
            outcome: match result {
                Ok(receipt) => SubmitOutcome::Accepted {
                    message: receipt.message,
                },
                Err(err) => {
                    board_warn!("enqueue failed: {}", err.kind);
                    SubmitOutcome::Failed
                }
            },
        },
    }
}

fn map_snapshot(snapshot: queueboard_client::QueueSnapshot) -> queueboard_core::QueueSnapshot {
    queueboard_core::QueueSnapshot {
        active: snapshot.active.into_iter().map(map_record).collect(),
        pending: snapshot.pending.into_iter().map(map_record).collect(),
    }
}

fn map_record(record: queueboard_client::JobRecord) -> queueboard_core::JobRecord {
    queueboard_core::JobRecord {
        username: record.username,
        user_id: record.user_id,
        catch_converts: record.catch_converts,
        total_units: record.total_units,
        remaining_units: record.remaining_units,
    }
}
