use std::sync::Once;

use queueboard_core::{
    update, DashboardState, Effect, FetchOutcome, JobRecord, Msg, QueueSnapshot, QueueView,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn pending_record(username: &str) -> JobRecord {
    JobRecord {
        username: username.to_string(),
        user_id: "0".to_string(),
        catch_converts: false,
        total_units: None,
        remaining_units: None,
    }
}

fn snapshot_with_pending(usernames: &[&str]) -> QueueSnapshot {
    QueueSnapshot {
        active: Vec::new(),
        pending: usernames.iter().map(|name| pending_record(name)).collect(),
    }
}

#[test]
fn refresh_issues_monotonic_fetches() {
    init_logging();
    let state = DashboardState::new();

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::FetchQueue { seq: 1 }]);

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::FetchQueue { seq: 2 }]);
    assert_eq!(state.last_issued(), 2);
}

#[test]
fn snapshot_for_current_fetch_is_accepted() {
    init_logging();
    let state = DashboardState::new();
    let (state, _effects) = update(state, Msg::RefreshRequested);

    let snapshot = snapshot_with_pending(&["a"]);
    let (mut state, effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 1,
            outcome: FetchOutcome::Loaded(snapshot.clone()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.queue_view(), &QueueView::Loaded(snapshot));
    assert!(state.consume_dirty());
}

#[test]
fn stale_response_does_not_overwrite_newer_fetch() {
    init_logging();
    let state = DashboardState::new();
    let (state, _effects) = update(state, Msg::RefreshRequested);
    let (state, _effects) = update(state, Msg::RefreshRequested);

    // A response from the first fetch arrives after the second was issued.
    let (mut state, effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 1,
            outcome: FetchOutcome::Loaded(snapshot_with_pending(&["old"])),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.queue_view(), &QueueView::Loading);
    assert!(!state.consume_dirty());

    let newer = snapshot_with_pending(&["new"]);
    let (mut state, _effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 2,
            outcome: FetchOutcome::Loaded(newer.clone()),
        },
    );
    assert_eq!(state.queue_view(), &QueueView::Loaded(newer.clone()));
    assert!(state.consume_dirty());

    // The straggler resolving last must still lose.
    let (mut state, _effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 1,
            outcome: FetchOutcome::Loaded(snapshot_with_pending(&["old"])),
        },
    );
    assert_eq!(state.queue_view(), &QueueView::Loaded(newer));
    assert!(!state.consume_dirty());
}

#[test]
fn failed_fetch_switches_to_explicit_error_state() {
    init_logging();
    let state = DashboardState::new();
    let (state, _effects) = update(state, Msg::RefreshRequested);

    let (mut state, effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 1,
            outcome: FetchOutcome::Failed,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.queue_view(), &QueueView::Unavailable);
    assert!(state.consume_dirty());
}

#[test]
fn stale_failure_does_not_clobber_loaded_view() {
    init_logging();
    let state = DashboardState::new();
    let (state, _effects) = update(state, Msg::RefreshRequested);

    let snapshot = snapshot_with_pending(&["a"]);
    let (state, _effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 1,
            outcome: FetchOutcome::Loaded(snapshot.clone()),
        },
    );

    let (state, _effects) = update(state, Msg::RefreshRequested);
    let (state, _effects) = update(state, Msg::RefreshRequested);

    // Only the failure of the latest fetch may flip the view.
    let (state, _effects) = update(
        state,
        Msg::SnapshotLoaded {
            seq: 2,
            outcome: FetchOutcome::Failed,
        },
    );
    assert_eq!(state.queue_view(), &QueueView::Loaded(snapshot));
}
