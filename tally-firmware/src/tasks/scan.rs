//! Panel scan-out task
//!
//! Cycles the four row groups of the panel forever, reading whatever frame
//! the sketch loop last published.

use defmt::*;
use tally_hal_rp2040::SharedFrame;

use crate::board::PanelScanner;

#[embassy_executor::task]
pub async fn panel_scan_task(mut scanner: PanelScanner, frame: &'static SharedFrame) {
    info!("Panel scan task started");

    loop {
        if let Err(e) = scanner.scan_phase(frame).await {
            warn!("Panel scan failed: {:?}", e);
        }
    }
}
