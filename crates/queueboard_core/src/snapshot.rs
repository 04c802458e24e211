/// One point-in-time read of the backend queue.
///
/// The client never mutates a snapshot; every lifecycle transition
/// (pending to active, active to gone) happens server-side between polls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueSnapshot {
    /// Jobs currently being processed, in processing order.
    pub active: Vec<JobRecord>,
    /// Jobs waiting to start, in queue order.
    pub pending: Vec<JobRecord>,
}

/// One user's job state within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub username: String,
    /// Unique within a snapshot. The backend may send an integer or a
    /// string; both are normalized to the decimal string form.
    pub user_id: String,
    /// Chosen at submission time, immutable for the life of the job.
    pub catch_converts: bool,
    /// Total work units, fixed at creation. Present only for active jobs.
    pub total_units: Option<u64>,
    /// Work units not yet completed. Never exceeds `total_units`.
    pub remaining_units: Option<u64>,
}
