//! Embassy async tasks

pub mod scan;
pub mod sketch;

pub use scan::panel_scan_task;
pub use sketch::run_sketch;
