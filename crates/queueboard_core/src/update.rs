use crate::{DashboardState, Effect, FetchOutcome, Msg, SubmitOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => {
            let seq = state.issue_fetch();
            vec![Effect::FetchQueue { seq }]
        }
        Msg::SubmitRequested { catch_converts } => {
            vec![Effect::EnqueueSelf { catch_converts }]
        }
        Msg::SubmitCompleted { outcome } => {
            // Refresh is unconditional: the displayed queue must stay current
            // even when the notice step failed.
            let seq = state.issue_fetch();
            let fetch = Effect::FetchQueue { seq };
            match outcome {
                SubmitOutcome::Accepted { message } => {
                    vec![Effect::Notify { message }, fetch]
                }
                SubmitOutcome::Failed => vec![fetch],
            }
        }
        Msg::SnapshotLoaded { seq, outcome } => {
            if seq != state.last_issued() {
                // A newer fetch has been issued; this response is stale.
                return (state, Vec::new());
            }
            match outcome {
                FetchOutcome::Loaded(snapshot) => state.accept_snapshot(snapshot),
                FetchOutcome::Failed => state.mark_unavailable(),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
