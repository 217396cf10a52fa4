//! Tally serial line protocol
//!
//! This crate defines the text protocol spoken between a Tally panel (clock
//! or scoreboard) and the host peer that drives it. Everything travels as
//! plain ASCII lines:
//!
//! ```text
//! peer  -> clock       5000\n                  absolute target, device ms
//! peer  -> scoreboard  42-17\n                 literal text to display
//! clock -> peer        EMIT TIME_SYNC 1234\r\n device uptime at boot
//! ```
//!
//! Lines are terminated by `\n`. Peers that send no terminator are still
//! understood: the receiving side flushes a partial line after it has been
//! idle for a while (see [`line::LineAssembler::take_pending`]).
//!
//! The `EMIT <SIGNAL> <args...>` shape is shared with the peer's other
//! serial devices, so [`signal::Signal`] covers the whole vocabulary even
//! though the panels only ever produce `TIME_SYNC`.

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod messages;
pub mod signal;
pub mod sync;

pub use line::{Line, LineAssembler, LineError, MAX_LINE_LEN};
pub use messages::{DeviceMessage, EmitLine, MessageError, PeerMessage};
pub use signal::Signal;
pub use sync::TimeOffset;
