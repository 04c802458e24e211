use std::path::PathBuf;

use chrono::Utc;
use queueboard_core::{render_queue_table, QueueView, RequestSeq};

use crate::persist::{AtomicPageWriter, PublishError};

const PAGE_FILENAME: &str = "queue.html";

/// Renders the queue view into a standalone page and atomically replaces the
/// published file. This is the file-system analogue of swapping out a display
/// region's markup wholesale.
pub struct PagePublisher {
    writer: AtomicPageWriter,
}

impl PagePublisher {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            writer: AtomicPageWriter::new(output_dir),
        }
    }

    pub fn publish(&self, view: &QueueView, seq: RequestSeq) -> Result<PathBuf, PublishError> {
        let table = render_queue_table(view);
        let page = build_page(&table, seq, &Utc::now().to_rfc3339());
        self.writer.write(PAGE_FILENAME, &page)
    }
}

fn build_page(table: &str, seq: RequestSeq, generated_utc: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Fetch queue</title></head>\n\
         <body>\n\
         <h1>Fetch queue</h1>\n\
         <p>generated {generated_utc} (refresh #{seq})</p>\n\
         <div id=\"fetch_queue_container\">{table}</div>\n\
         </body>\n\
         </html>\n"
    )
}
