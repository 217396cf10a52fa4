//! P10 panel scan-out over the HUB12 connector
//!
//! The sketch loop and the scan-out run as separate tasks. `PanelSink`
//! rasterises text into a private `Bitmap` and publishes the finished frame
//! to a `SharedFrame`; `Hub12Scanner` reads the published frame one scan
//! phase at a time and shifts it into the panel.
//!
//! Wiring: SPI clock and data to the column shift registers, A and B
//! select one of four row groups, a rising edge on latch transfers the
//! shifted data to the outputs, and OE (active low) gates the LEDs.
//! Brightness is the fraction of each phase OE is held low.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Timer;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiBus;
use portable_atomic::{AtomicU8, Ordering};
use tally_display::{
    Bitmap, DisplayError, DisplaySink, Font, GraphicsSink, SCAN_BYTES, SCAN_PHASES,
};

/// Length of one scan phase in microseconds (250 Hz full refresh)
pub const PHASE_MICROS: u64 = 1000;

/// Frame handed from the sketch loop to the scan-out task
pub struct SharedFrame {
    bitmap: Mutex<CriticalSectionRawMutex, RefCell<Bitmap>>,
    brightness: AtomicU8,
}

impl Default for SharedFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFrame {
    /// Blank frame at full brightness
    pub const fn new() -> Self {
        Self {
            bitmap: Mutex::new(RefCell::new(Bitmap::new())),
            brightness: AtomicU8::new(u8::MAX),
        }
    }

    /// Replace the displayed frame
    pub fn publish(&self, bitmap: &Bitmap) {
        self.bitmap.lock(|frame| *frame.borrow_mut() = *bitmap);
    }

    /// Shift data for one scan phase of the current frame
    pub fn scan_bytes(&self, phase: usize) -> [u8; SCAN_BYTES] {
        self.bitmap.lock(|frame| frame.borrow().scan_bytes(phase))
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.brightness.store(brightness, Ordering::Relaxed);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }
}

/// `DisplaySink` publishing into a `SharedFrame`
pub struct PanelSink {
    graphics: GraphicsSink<Bitmap>,
    frame: &'static SharedFrame,
}

impl PanelSink {
    pub fn new(frame: &'static SharedFrame) -> Self {
        Self {
            graphics: GraphicsSink::new(Bitmap::new()),
            frame,
        }
    }
}

impl DisplaySink for PanelSink {
    fn configure(&mut self, brightness: u8, font: Font) -> Result<(), DisplayError> {
        self.graphics.configure(brightness, font)?;
        self.frame.set_brightness(brightness);
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), DisplayError> {
        self.graphics.initialize()?;
        self.frame.publish(self.graphics.target());
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        self.graphics.draw_text(x, y, text)?;
        self.frame.publish(self.graphics.target());
        Ok(())
    }
}

/// Control lines of the HUB12 connector
pub struct Hub12Pins<A, B, L, OE> {
    pub a: A,
    pub b: B,
    pub latch: L,
    /// Output enable, active low
    pub oe: OE,
}

/// Drives one P10 panel from a `SharedFrame`
pub struct Hub12Scanner<SPI, A, B, L, OE> {
    spi: SPI,
    pins: Hub12Pins<A, B, L, OE>,
    phase: usize,
}

impl<SPI, A, B, L, OE> Hub12Scanner<SPI, A, B, L, OE>
where
    SPI: SpiBus<u8>,
    A: OutputPin,
    B: OutputPin,
    L: OutputPin,
    OE: OutputPin,
{
    pub fn new(spi: SPI, pins: Hub12Pins<A, B, L, OE>) -> Self {
        Self {
            spi,
            pins,
            phase: 0,
        }
    }

    /// Show the next row group for one phase period
    pub async fn scan_phase(&mut self, frame: &SharedFrame) -> Result<(), DisplayError> {
        let data = frame.scan_bytes(self.phase);
        let on_micros = PHASE_MICROS * u64::from(frame.brightness()) / u64::from(u8::MAX);

        // Blank while the outputs change
        self.pins.oe.set_high().map_err(|_| DisplayError::Communication)?;

        self.spi.write(&data).map_err(|_| DisplayError::Communication)?;
        self.spi.flush().map_err(|_| DisplayError::Communication)?;

        self.pins
            .a
            .set_state(PinState::from(self.phase & 0b01 != 0))
            .map_err(|_| DisplayError::Communication)?;
        self.pins
            .b
            .set_state(PinState::from(self.phase & 0b10 != 0))
            .map_err(|_| DisplayError::Communication)?;
        self.pins.latch.set_high().map_err(|_| DisplayError::Communication)?;
        self.pins.latch.set_low().map_err(|_| DisplayError::Communication)?;

        if on_micros > 0 {
            self.pins.oe.set_low().map_err(|_| DisplayError::Communication)?;
            Timer::after_micros(on_micros).await;
            self.pins.oe.set_high().map_err(|_| DisplayError::Communication)?;
        }
        if on_micros < PHASE_MICROS {
            Timer::after_micros(PHASE_MICROS - on_micros).await;
        }

        self.phase = (self.phase + 1) % SCAN_PHASES;
        Ok(())
    }
}
