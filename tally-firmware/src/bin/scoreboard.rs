//! Tally scoreboard
//!
//! Shows the last line received over serial, verbatim, until the next one
//! arrives. Shows `00000` until then.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use tally_core::ScoreSketch;
use tally_firmware::{board, tasks};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tally scoreboard starting...");

    let board = board::init();

    spawner
        .spawn(tasks::panel_scan_task(board.scanner, board.frame))
        .unwrap();

    tasks::run_sketch("Scoreboard", ScoreSketch::new(), board.rx, board.tx, board.sink).await
}
