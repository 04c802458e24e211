use crate::{JobRecord, QueueView};

const HEADER_ROW: &str =
    "<tr><th>Username</th><th>User Id</th><th>Catch Converts?</th><th>Progress</th></tr>";

/// Render the queue view as HTML table markup.
///
/// Row order is header, then active jobs, then pending jobs, each group in
/// snapshot order. The caller replaces the display region wholesale with the
/// returned markup.
pub fn render_queue_table(view: &QueueView) -> String {
    let snapshot = match view {
        QueueView::Loading => return format!("<table>{HEADER_ROW}</table>"),
        QueueView::Unavailable => {
            return "<p class=\"queue-error\">unable to load queue</p>".to_string()
        }
        QueueView::Loaded(snapshot) => snapshot,
    };

    let mut rows = Vec::with_capacity(snapshot.active.len() + snapshot.pending.len());
    for record in &snapshot.active {
        rows.push(render_row(record));
    }
    for record in &snapshot.pending {
        rows.push(render_row(record));
    }
    format!("<table>{HEADER_ROW}{}</table>", rows.join(""))
}

fn render_row(record: &JobRecord) -> String {
    let progress = match (record.total_units, record.remaining_units) {
        // A zero total has no measurable progress either.
        (Some(total), Some(remaining)) if total > 0 => format_progress(total, remaining),
        _ => String::new(),
    };
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&record.username),
        escape_html(&record.user_id),
        record.catch_converts,
        progress,
    )
}

/// `"<completed> / <total> (<percent>%)"` with the percentage rounded to two
/// decimal places.
fn format_progress(total: u64, remaining: u64) -> String {
    let completed = total.saturating_sub(remaining);
    let percent = completed as f64 / total as f64 * 100.0;
    format!("{completed} / {total} ({percent:.2}%)")
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
