//! Board setup
//!
//! Pin map (Raspberry Pi Pico):
//!
//! | Signal | GPIO | Peripheral |
//! |---|---|---|
//! | Serial TX | 0 | UART0 |
//! | Serial RX | 1 | UART0 |
//! | HUB12 A | 6 | |
//! | HUB12 B | 7 | |
//! | HUB12 latch (SCLK) | 8 | |
//! | HUB12 OE | 9 | |
//! | HUB12 CLK | 10 | SPI1 |
//! | HUB12 R (data) | 11 | SPI1 |

use defmt::*;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{SPI1, UART0};
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, BufferedUartTx, Uart};
use static_cell::StaticCell;

use tally_hal_rp2040::{uart_config, Hub12Pins, Hub12Scanner, PanelSink, SerialPort, SharedFrame};

use crate::config;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; config::UART_TX_BUF]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; config::UART_RX_BUF]> = StaticCell::new();

/// Frame shared between the sketch loop and the scan-out task
static FRAME: SharedFrame = SharedFrame::new();

/// HUB12 scanner on this board's pins
pub type PanelScanner = Hub12Scanner<
    Spi<'static, SPI1, Blocking>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
>;

/// Peripherals the firmware uses, ready to hand to tasks
pub struct Board {
    pub rx: SerialPort<BufferedUartRx>,
    pub tx: SerialPort<BufferedUartTx>,
    pub sink: PanelSink,
    pub scanner: PanelScanner,
    pub frame: &'static SharedFrame,
}

/// Bring up the RP2040 and its peripherals
pub fn init() -> Board {
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let serial = config::serial_config();
    let tx_buf = TX_BUF.init([0u8; config::UART_TX_BUF]);
    let rx_buf = RX_BUF.init([0u8; config::UART_RX_BUF]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&serial));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", serial.baudrate);

    let mut spi_config = spi::Config::default();
    spi_config.frequency = config::PANEL_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);

    // OE starts high so the panel is dark until the first scan
    let pins = Hub12Pins {
        a: Output::new(p.PIN_6, Level::Low),
        b: Output::new(p.PIN_7, Level::Low),
        latch: Output::new(p.PIN_8, Level::Low),
        oe: Output::new(p.PIN_9, Level::High),
    };
    info!("HUB12 panel initialized");

    Board {
        rx: SerialPort::new(rx),
        tx: SerialPort::new(tx),
        sink: PanelSink::new(&FRAME),
        scanner: Hub12Scanner::new(spi, pins),
        frame: &FRAME,
    }
}
