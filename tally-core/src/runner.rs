//! Cycle runner
//!
//! Owns a sketch together with its serial port, display sink and clock, and
//! performs one cycle per call: drain serial, apply the newest line, render,
//! draw. Every cycle redraws the panel in full, changed or not.
//!
//! A cycle reads the clock once. A line received in a cycle is therefore
//! rendered against the same instant it was applied at.

use tally_display::{DisplayError, DisplaySink, PanelConfig};
use tally_hal::{Monotonic, SerialRx, SerialTx};

use crate::reader::{LineReader, ReaderConfig};
use crate::render::Frame;
use crate::sketch::Sketch;

/// Errors a cycle can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunError {
    /// `cycle` called before `start`
    NotStarted,
    /// The display sink refused a call
    Display(DisplayError),
}

impl From<DisplayError> for RunError {
    fn from(e: DisplayError) -> Self {
        RunError::Display(e)
    }
}

/// Result of one successful cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Whether a received line was applied this cycle
    pub updated: bool,
    /// What was drawn
    pub frame: Frame,
}

/// Loop counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopStats {
    /// Completed cycles
    pub cycles: u32,
    /// Lines applied to the sketch
    pub updates: u32,
    /// Lines dropped in favour of a newer one
    pub superseded: u32,
    /// Lines cut to fit the buffer
    pub overflows: u32,
    /// Lines dropped for invalid UTF-8
    pub rejected: u32,
    /// Serial read errors
    pub read_errors: u32,
}

/// Drives a sketch against its peripherals
pub struct Runner<S, R, T, D, C> {
    sketch: S,
    rx: R,
    tx: T,
    sink: D,
    clock: C,
    panel: PanelConfig,
    reader: LineReader,
    cycles: u32,
    updates: u32,
    started: bool,
    announced: bool,
}

impl<S, R, T, D, C> Runner<S, R, T, D, C>
where
    S: Sketch,
    R: SerialRx,
    T: SerialTx,
    D: DisplaySink,
    C: Monotonic,
{
    /// Assemble a runner; nothing is touched until [`start`](Self::start)
    pub fn new(
        sketch: S,
        rx: R,
        tx: T,
        sink: D,
        clock: C,
        panel: PanelConfig,
        reader: ReaderConfig,
    ) -> Self {
        Self {
            sketch,
            rx,
            tx,
            sink,
            clock,
            panel,
            reader: LineReader::new(reader),
            cycles: 0,
            updates: 0,
            started: false,
            announced: false,
        }
    }

    /// Configure and initialise the sink, then run the sketch's startup
    /// output
    ///
    /// Calling it again re-initialises the sink. The startup output is
    /// written once, after the first successful initialisation.
    pub fn start(&mut self) -> Result<(), RunError> {
        self.sink.configure(self.panel.brightness, self.panel.font)?;
        self.sink.initialize()?;
        self.started = true;

        if !self.announced {
            let now = self.clock.now_millis();
            self.sketch.start(&mut self.tx, now);
            self.announced = true;
        }
        Ok(())
    }

    /// Run one drain, parse, format, draw pass
    pub fn cycle(&mut self) -> Result<CycleOutcome, RunError> {
        if !self.started {
            return Err(RunError::NotStarted);
        }

        let now = self.clock.now_millis();
        let line = self.reader.poll(&mut self.rx, now);
        let updated = match line {
            Some(line) => {
                self.sketch.apply(&line, &mut self.tx);
                self.updates = self.updates.saturating_add(1);
                true
            }
            None => false,
        };

        let frame = self.sketch.render(now);
        self.sink
            .draw_text(self.panel.origin_x, self.panel.origin_y, &frame)?;
        self.cycles = self.cycles.wrapping_add(1);

        Ok(CycleOutcome { updated, frame })
    }

    /// The sketch
    pub fn sketch(&self) -> &S {
        &self.sketch
    }

    /// The display sink
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Mutable access to the display sink
    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    /// Counters since creation
    pub fn stats(&self) -> LoopStats {
        let reader = self.reader.stats();
        LoopStats {
            cycles: self.cycles,
            updates: self.updates,
            superseded: reader.superseded,
            overflows: reader.overflows,
            rejected: reader.rejected,
            read_errors: reader.read_errors,
        }
    }
}
