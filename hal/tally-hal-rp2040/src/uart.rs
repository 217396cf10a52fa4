//! Serial adapter for the embassy UART
//!
//! Wraps either half of a `BufferedUart` (or anything else speaking the
//! blocking `embedded-io` traits) so the sketch loop can poll it without
//! waiting.

use embassy_rp::uart;
use embedded_io::{Read, ReadReady, Write};
use tally_hal::uart::{DataBits, Parity, StopBits};
use tally_hal::{SerialConfig, SerialRx, SerialTx};

/// `SerialRx`/`SerialTx` over an `embedded-io` port
pub struct SerialPort<P> {
    inner: P,
}

impl<P> SerialPort<P> {
    /// Wrap a port
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Unwrap the port
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Read + ReadReady> SerialRx for SerialPort<P> {
    type Error = P::Error;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // `read` would block on an empty buffer
        if buf.is_empty() || !self.inner.read_ready()? {
            return Ok(0);
        }
        self.inner.read(buf)
    }
}

impl<P: Write> SerialTx for SerialPort<P> {
    type Error = P::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

/// Translate a serial config into the embassy UART config
pub fn uart_config(config: &SerialConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}
