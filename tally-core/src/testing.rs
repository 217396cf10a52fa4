//! Serial, clock and sink doubles shared by the unit tests

use core::cell::{Cell, RefCell};

use heapless::{Deque, String};
use tally_display::{DisplayError, DisplaySink, Font};
use tally_hal::{Monotonic, SerialRx, SerialTx};

/// Clock the test advances by hand
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: u64) {
        self.now.set(now);
    }
}

impl Monotonic for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Receive side fed by the test
pub struct ScriptedRx {
    pending: RefCell<Deque<u8, 512>>,
    fail_next: Cell<bool>,
}

impl ScriptedRx {
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(Deque::new()),
            fail_next: Cell::new(false),
        }
    }

    pub fn push(&self, bytes: &[u8]) {
        let mut pending = self.pending.borrow_mut();
        for &byte in bytes {
            pending.push_back(byte).unwrap();
        }
    }

    pub fn fail_next_read(&self) {
        self.fail_next.set(true);
    }

    pub fn remaining(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl SerialRx for &ScriptedRx {
    type Error = ();

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        if self.fail_next.replace(false) {
            return Err(());
        }
        let mut pending = self.pending.borrow_mut();
        let mut n = 0;
        while n < buf.len() {
            match pending.pop_front() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

/// Transmit side the test inspects
pub struct CapturedTx {
    out: RefCell<String<512>>,
    fail: Cell<bool>,
}

impl CapturedTx {
    pub fn new() -> Self {
        Self {
            out: RefCell::new(String::new()),
            fail: Cell::new(false),
        }
    }

    pub fn failing() -> Self {
        let tx = Self::new();
        tx.fail.set(true);
        tx
    }

    pub fn output(&self) -> String<512> {
        self.out.borrow().clone()
    }

    pub fn lines_starting_with(&self, prefix: &str) -> usize {
        self.out
            .borrow()
            .split("\r\n")
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl SerialTx for &CapturedTx {
    type Error = ();

    fn write_all(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail.get() {
            return Err(());
        }
        let text = core::str::from_utf8(data).map_err(|_| ())?;
        self.out.borrow_mut().push_str(text)
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

/// Sink remembering what it was asked to draw
pub struct RecordingSink {
    pub brightness: Option<u8>,
    pub font: Option<Font>,
    pub initialized: bool,
    pub draws: u32,
    pub last: Option<(i32, i32, String<64>)>,
    pub fail_draws: bool,
    pub fail_init: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            brightness: None,
            font: None,
            initialized: false,
            draws: 0,
            last: None,
            fail_draws: false,
            fail_init: false,
        }
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last.as_ref().map(|(_, _, text)| text.as_str())
    }
}

impl DisplaySink for RecordingSink {
    fn configure(&mut self, brightness: u8, font: Font) -> Result<(), DisplayError> {
        self.brightness = Some(brightness);
        self.font = Some(font);
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), DisplayError> {
        if self.fail_init {
            return Err(DisplayError::Communication);
        }
        self.initialized = true;
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        if self.fail_draws {
            return Err(DisplayError::Communication);
        }
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        let mut copy = String::new();
        copy.push_str(text).map_err(|_| DisplayError::Communication)?;
        self.last = Some((x, y, copy));
        self.draws += 1;
        Ok(())
    }
}
