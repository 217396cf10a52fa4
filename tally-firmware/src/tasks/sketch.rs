//! Sketch loop
//!
//! Runs one sketch forever: drain serial, apply the newest line, render,
//! draw, yield. There is no frame timer; the loop redraws as fast as the
//! executor lets it.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Instant, Timer};
use tally_core::{LoopStats, ReaderConfig, RunError, Runner, Sketch};
use tally_display::DisplaySink;
use tally_hal::{SerialRx, SerialTx};
use tally_hal_rp2040::EmbassyClock;

use crate::config;

/// Drive `sketch` until power-off
///
/// Display errors are logged and the loop carries on with the next cycle.
pub async fn run_sketch<S, R, T, D>(name: &str, sketch: S, rx: R, tx: T, sink: D) -> !
where
    S: Sketch,
    R: SerialRx,
    T: SerialTx,
    D: DisplaySink,
{
    info!("{} sketch started", name);

    let reader = ReaderConfig {
        idle_flush_ms: Some(config::IDLE_FLUSH_MS),
    };
    let mut runner = Runner::new(
        sketch,
        rx,
        tx,
        sink,
        EmbassyClock,
        config::panel_config(),
        reader,
    );

    if let Err(e) = runner.start() {
        error!("Panel start failed: {:?}", e);
    }

    let mut seen = LoopStats::default();
    let mut last_report = Instant::now();

    loop {
        match runner.cycle() {
            Ok(outcome) if outcome.updated => {
                debug!("Update applied: {}", outcome.frame.as_str());
            }
            Ok(_) => {}
            Err(RunError::NotStarted) => {
                Timer::after(config::START_RETRY).await;
                if let Err(e) = runner.start() {
                    error!("Panel start failed: {:?}", e);
                }
            }
            Err(e) => {
                error!("Cycle failed: {:?}", e);
            }
        }

        let stats = runner.stats();
        report_drops(&seen, &stats);
        seen = stats;

        if last_report.elapsed() >= config::STATS_INTERVAL {
            info!("{} loop: {:?}", name, stats);
            last_report = Instant::now();
        }

        yield_now().await;
    }
}

fn report_drops(before: &LoopStats, after: &LoopStats) {
    if after.superseded > before.superseded {
        warn!(
            "{} stale line(s) superseded",
            after.superseded - before.superseded
        );
    }
    if after.overflows > before.overflows {
        warn!("{} oversized line(s) cut", after.overflows - before.overflows);
    }
    if after.rejected > before.rejected {
        warn!("{} non-UTF-8 line(s) dropped", after.rejected - before.rejected);
    }
    if after.read_errors > before.read_errors {
        trace!("{} serial read error(s)", after.read_errors - before.read_errors);
    }
}
