//! Tally - countdown clock and scoreboard firmware
//!
//! Board setup and embassy tasks shared by the two binaries:
//!
//! - `clock`: counts down to a target time received over serial
//! - `scoreboard`: shows the last score line received over serial
//!
//! Each binary runs its sketch loop in the main task and spawns the panel
//! scan-out as a second task.

#![no_std]

pub mod board;
pub mod config;
pub mod tasks;
