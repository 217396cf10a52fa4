//! Message types for the Tally serial protocol
//!
//! Messages are divided into two directions:
//! - Device → Peer: `EMIT <SIGNAL> <args...>` lines
//! - Peer → Device: bare payload lines (a target time or display text)

use core::fmt::Write;

use heapless::{String, Vec};

use crate::signal::Signal;

/// Keyword that opens every device-originated line
pub const EMIT: &str = "EMIT";

/// Maximum number of arguments after the signal name
pub const MAX_ARGS: usize = 4;

/// Errors that can occur while parsing or encoding messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageError {
    /// Line does not start with `EMIT`
    NotEmit,
    /// `EMIT` with no signal name after it
    MissingSignal,
    /// Signal name is not one this protocol knows
    UnknownSignal,
    /// More than [`MAX_ARGS`] arguments
    TooManyArgs,
    /// Required argument is absent
    MissingArgument,
    /// Argument could not be parsed, or text contains a line break
    InvalidArgument,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// A tokenised `EMIT` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitLine<'a> {
    /// Signal name as received
    pub signal: &'a str,
    /// Whitespace-separated arguments
    pub args: Vec<&'a str, MAX_ARGS>,
}

impl<'a> EmitLine<'a> {
    /// Split a line into signal name and arguments
    pub fn parse(line: &'a str) -> Result<Self, MessageError> {
        let mut tokens = line.split_ascii_whitespace();

        if tokens.next() != Some(EMIT) {
            return Err(MessageError::NotEmit);
        }
        let signal = tokens.next().ok_or(MessageError::MissingSignal)?;

        let mut args = Vec::new();
        for token in tokens {
            args.push(token).map_err(|_| MessageError::TooManyArgs)?;
        }

        Ok(Self { signal, args })
    }

    /// The known signal this line carries, if any
    pub fn known_signal(&self) -> Option<Signal> {
        Signal::from_name(self.signal)
    }
}

/// Messages sent by a panel to the peer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceMessage {
    /// Device uptime at the moment of sending
    TimeSync { millis: u64 },
}

impl DeviceMessage {
    /// Parse a message from a received line
    pub fn from_line(line: &str) -> Result<Self, MessageError> {
        let emit = EmitLine::parse(line)?;
        match emit.known_signal() {
            Some(Signal::TimeSync) => {
                let arg = emit.args.first().ok_or(MessageError::MissingArgument)?;
                let millis = arg.parse().map_err(|_| MessageError::InvalidArgument)?;
                Ok(DeviceMessage::TimeSync { millis })
            }
            _ => Err(MessageError::UnknownSignal),
        }
    }

    /// Encode this message as a line, without terminator
    pub fn to_line<const N: usize>(&self) -> Result<String<N>, MessageError> {
        let mut line = String::new();
        match self {
            DeviceMessage::TimeSync { millis } => {
                write!(line, "{} {} {}", EMIT, Signal::TimeSync.name(), millis)
                    .map_err(|_| MessageError::BufferTooSmall)?;
            }
        }
        Ok(line)
    }
}

/// Messages sent by the peer to a panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeerMessage<'a> {
    /// Absolute countdown target in device milliseconds (clock)
    Target { millis: i64 },
    /// Text to show verbatim (scoreboard)
    Text { text: &'a str },
}

impl<'a> PeerMessage<'a> {
    /// Encode this message as a `\n`-terminated line
    pub fn encode<const N: usize>(&self) -> Result<String<N>, MessageError> {
        let mut line = String::new();
        match self {
            PeerMessage::Target { millis } => {
                write!(line, "{}", millis).map_err(|_| MessageError::BufferTooSmall)?;
            }
            PeerMessage::Text { text } => {
                if text.contains(&['\r', '\n'][..]) {
                    return Err(MessageError::InvalidArgument);
                }
                line.push_str(text)
                    .map_err(|_| MessageError::BufferTooSmall)?;
            }
        }
        line.push('\n').map_err(|_| MessageError::BufferTooSmall)?;
        Ok(line)
    }
}
