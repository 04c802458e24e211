use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use board_logging::{board_debug, board_error, board_info};
use queueboard_core::{update, DashboardState, Msg};

use crate::effects::EffectRunner;
use crate::page::PagePublisher;
use crate::settings::Settings;

const IDLE_SLEEP: Duration = Duration::from_millis(20);

pub fn run(settings: Settings) -> anyhow::Result<()> {
    board_info!(
        "queueboard starting: backend {} publishing to {}",
        settings.base_url,
        settings.output_dir.display()
    );

    let runner = EffectRunner::new(&settings);
    let publisher = PagePublisher::new(settings.output_dir.clone());
    let mut state = DashboardState::new();

    // Fail fast if the output location is unusable.
    publisher
        .publish(state.queue_view(), state.last_issued())
        .context("publish initial page")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    // Poll tick: one refresh per interval, after the initial message below.
    let interval = settings.poll_interval;
    let tick_tx = msg_tx.clone();
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tick_tx.send(Msg::RefreshRequested).is_err() {
            break;
        }
    });

    let initial = if settings.submit_on_start {
        Msg::SubmitRequested {
            catch_converts: settings.catch_converts,
        }
    } else {
        Msg::RefreshRequested
    };
    let _ = msg_tx.send(initial);

    loop {
        let mut inbox = Vec::new();
        while let Ok(msg) = msg_rx.try_recv() {
            inbox.push(msg);
        }
        while let Some(msg) = runner.poll_event() {
            inbox.push(msg);
        }

        for msg in inbox {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            match publisher.publish(state.queue_view(), state.last_issued()) {
                Ok(path) => board_debug!("published {}", path.display()),
                Err(err) => board_error!("failed to publish page: {}", err),
            }
        }

        thread::sleep(IDLE_SLEEP);
    }
}
