//! Tally countdown clock
//!
//! Shows the seconds left until a target time received over serial.
//! Announces itself with `hello` and one `EMIT TIME_SYNC <millis>` line so
//! the peer can translate its own clock into device milliseconds.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use tally_core::ClockSketch;
use tally_firmware::{board, tasks};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tally clock starting...");

    let board = board::init();

    spawner
        .spawn(tasks::panel_scan_task(board.scanner, board.frame))
        .unwrap();

    tasks::run_sketch("Clock", ClockSketch::new(), board.rx, board.tx, board.sink).await
}
