use pretty_assertions::assert_eq;
use queueboard_core::{render_queue_table, JobRecord, QueueSnapshot, QueueView};

fn active(username: &str, user_id: &str, total: u64, remaining: u64) -> JobRecord {
    JobRecord {
        username: username.to_string(),
        user_id: user_id.to_string(),
        catch_converts: true,
        total_units: Some(total),
        remaining_units: Some(remaining),
    }
}

fn pending(username: &str, user_id: &str) -> JobRecord {
    JobRecord {
        username: username.to_string(),
        user_id: user_id.to_string(),
        catch_converts: false,
        total_units: None,
        remaining_units: None,
    }
}

fn row_count(html: &str) -> usize {
    html.matches("<tr>").count()
}

#[test]
fn renders_header_plus_one_row_per_record() {
    let view = QueueView::Loaded(QueueSnapshot {
        active: vec![active("a", "1", 10, 3)],
        pending: vec![pending("b", "2"), pending("c", "3")],
    });

    let html = render_queue_table(&view);
    assert_eq!(row_count(&html), 4);
}

#[test]
fn active_rows_precede_pending_rows_in_snapshot_order() {
    let view = QueueView::Loaded(QueueSnapshot {
        active: vec![active("first", "1", 4, 2), active("second", "2", 8, 8)],
        pending: vec![pending("third", "3"), pending("fourth", "4")],
    });

    let html = render_queue_table(&view);
    let positions: Vec<usize> = ["first", "second", "third", "fourth"]
        .iter()
        .map(|name| html.find(name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn active_row_shows_completed_over_total_with_percent() {
    let view = QueueView::Loaded(QueueSnapshot {
        active: vec![active("a", "1", 10, 3)],
        pending: Vec::new(),
    });

    let html = render_queue_table(&view);
    assert!(html.contains("<td>7 / 10 (70.00%)</td>"), "html: {html}");
}

#[test]
fn pending_rows_have_no_progress_value() {
    let view = QueueView::Loaded(QueueSnapshot {
        active: Vec::new(),
        pending: vec![pending("b", "2")],
    });

    let html = render_queue_table(&view);
    assert!(html.contains("<td>b</td><td>2</td><td>false</td><td></td>"));
    assert!(!html.contains('%'));
}

#[test]
fn zero_total_skips_progress() {
    let view = QueueView::Loaded(QueueSnapshot {
        active: vec![active("a", "1", 0, 0)],
        pending: Vec::new(),
    });

    let html = render_queue_table(&view);
    assert!(html.contains("<td>true</td><td></td>"));
    assert!(!html.contains('%'));
}

#[test]
fn empty_snapshot_renders_header_only() {
    let view = QueueView::Loaded(QueueSnapshot::default());

    let html = render_queue_table(&view);
    assert_eq!(row_count(&html), 1);
    assert_eq!(
        html,
        "<table><tr><th>Username</th><th>User Id</th><th>Catch Converts?</th>\
         <th>Progress</th></tr></table>"
    );
}

#[test]
fn loading_renders_header_only() {
    let html = render_queue_table(&QueueView::Loading);
    assert_eq!(row_count(&html), 1);
}

#[test]
fn unavailable_renders_fallback_notice() {
    let html = render_queue_table(&QueueView::Unavailable);
    assert!(html.contains("unable to load queue"));
    assert!(!html.contains("<table>"));
}

#[test]
fn usernames_are_escaped() {
    let view = QueueView::Loaded(QueueSnapshot {
        active: Vec::new(),
        pending: vec![pending("<script>boom</script>", "2")],
    });

    let html = render_queue_table(&view);
    assert!(html.contains("&lt;script&gt;boom&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}
