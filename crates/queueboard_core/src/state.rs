use crate::QueueSnapshot;

/// Monotonic sequence number stamped on every issued queue fetch.
pub type RequestSeq = u64;

/// What the dashboard currently knows about the queue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueueView {
    /// No response accepted yet.
    #[default]
    Loading,
    /// The last accepted fetch delivered this snapshot.
    Loaded(QueueSnapshot),
    /// The last accepted fetch failed.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    last_issued: RequestSeq,
    queue: QueueView,
    dirty: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_view(&self) -> &QueueView {
        &self.queue
    }

    /// The sequence number of the most recently issued fetch. Responses
    /// carrying any other number are stale.
    pub fn last_issued(&self) -> RequestSeq {
        self.last_issued
    }

    /// Returns the render-needed flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn issue_fetch(&mut self) -> RequestSeq {
        self.last_issued += 1;
        self.last_issued
    }

    pub(crate) fn accept_snapshot(&mut self, snapshot: QueueSnapshot) {
        self.queue = QueueView::Loaded(snapshot);
        self.dirty = true;
    }

    pub(crate) fn mark_unavailable(&mut self) {
        self.queue = QueueView::Unavailable;
        self.dirty = true;
    }
}
