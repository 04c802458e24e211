//! Queueboard core: pure dashboard state machine and table rendering.
mod effect;
mod msg;
mod render;
mod snapshot;
mod state;
mod update;

pub use effect::Effect;
pub use msg::{FetchOutcome, Msg, SubmitOutcome};
pub use render::render_queue_table;
pub use snapshot::{JobRecord, QueueSnapshot};
pub use state::{DashboardState, QueueView, RequestSeq};
pub use update::update;
