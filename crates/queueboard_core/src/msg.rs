use crate::{QueueSnapshot, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page load or poll tick: issue a fresh queue fetch.
    RefreshRequested,
    /// User asked to enqueue a lookup job for themselves.
    SubmitRequested { catch_converts: bool },
    /// Client finished the enqueue round trip.
    SubmitCompleted { outcome: SubmitOutcome },
    /// Client finished the queue fetch issued with `seq`.
    SnapshotLoaded {
        seq: RequestSeq,
        outcome: FetchOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the job and returned a notice for the user.
    Accepted { message: String },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(QueueSnapshot),
    Failed,
}
