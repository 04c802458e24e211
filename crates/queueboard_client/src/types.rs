use std::fmt;

/// Sequence number echoed back with every queue fetch so the caller can
/// discard responses that resolve out of order.
pub type RequestSeq = u64;

/// Decoded queue snapshot as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueSnapshot {
    pub active: Vec<JobRecord>,
    pub pending: Vec<JobRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub username: String,
    pub user_id: String,
    pub catch_converts: bool,
    pub total_units: Option<u64>,
    pub remaining_units: Option<u64>,
}

/// Backend acknowledgement for an enqueue request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnqueueReceipt {
    pub message: String,
}

/// Event emitted by [`crate::ClientHandle`] once a command completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SnapshotLoaded {
        seq: RequestSeq,
        result: Result<QueueSnapshot, ApiError>,
    },
    EnqueueCompleted {
        result: Result<EnqueueReceipt, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
}

impl FailureKind {
    /// Transport-level failures are worth one more attempt; anything the
    /// backend answered is not.
    pub(crate) fn is_retryable(&self) -> bool {
        matches!(self, FailureKind::Timeout | FailureKind::Network)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}
