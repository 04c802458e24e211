use std::path::PathBuf;
use std::time::Duration;

use board_logging::board_warn;

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Backend origin the wire paths are rooted at.
    pub base_url: String,
    /// Directory the rendered page is published into.
    pub output_dir: PathBuf,
    /// Delay between queue polls.
    pub poll_interval: Duration,
    /// Enqueue a self-lookup job before the first poll.
    pub submit_on_start: bool,
    /// The catch-converts toggle passed along with that job.
    pub catch_converts: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let output_dir = match std::env::var("QUEUEBOARD_OUTPUT_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("public"),
        };

        Self {
            base_url: std::env::var("QUEUEBOARD_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            output_dir,
            poll_interval: Duration::from_secs(parse_or_default(
                "QUEUEBOARD_POLL_SECS",
                std::env::var("QUEUEBOARD_POLL_SECS").ok(),
                30,
            )),
            submit_on_start: parse_or_default(
                "QUEUEBOARD_SUBMIT_ON_START",
                std::env::var("QUEUEBOARD_SUBMIT_ON_START").ok(),
                false,
            ),
            catch_converts: parse_or_default(
                "QUEUEBOARD_CATCH_CONVERTS",
                std::env::var("QUEUEBOARD_CATCH_CONVERTS").ok(),
                false,
            ),
        }
    }
}

/// Parse an optional raw value, falling back to `default` (with a warning)
/// when it is missing or malformed.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match raw {
        None => default,
        Some(text) => text.parse().unwrap_or_else(|_| {
            board_warn!("Invalid {} value {:?}, using default {}", key, text, default);
            default
        }),
    }
}
