//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for all hardware and network traits,
//! enabling development and testing on desktop without a display or radio.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockBus`] | [`LcdBus`] | Records every command/data transfer |
//! | [`MockDelay`] | [`DelayNs`] | Records requested delays without sleeping |
//! | [`MockWallClock`] | [`WallClock`] | Settable calendar time, shareable |
//! | [`MockWifi`] | [`WifiLink`] | Connect/disconnect bookkeeping |
//! | [`MockTimeSync`] | [`TimeSync`] | Sets a linked clock when started |
//!
//! # Example
//!
//! ```rust
//! use spi_lcd_clock::hal::{MockBus, MockDelay};
//! use spi_lcd_clock::lcd::{Color, Lcd};
//!
//! let mut lcd = Lcd::new(MockBus::new(), MockDelay::new());
//! lcd.draw_pixel(3, 4, Color::RED).unwrap();
//!
//! assert_eq!(lcd.bus().windows(), vec![(3, 4, 3, 4)]);
//! assert_eq!(lcd.bus().pixel_bytes(), vec![0xF8, 0x00]);
//! ```
//!
//! [`LcdBus`]: crate::traits::LcdBus
//! [`WallClock`]: crate::traits::WallClock
//! [`WifiLink`]: crate::traits::WifiLink
//! [`TimeSync`]: crate::traits::TimeSync

use crate::lcd::Command;
use crate::traits::{LcdBus, TimeSync, WallClock, WifiLink};
use embedded_hal::delay::DelayNs;

extern crate alloc;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

// ============================================================================
// Hardware Mocks
// ============================================================================

/// One transfer (or reset line change) seen by [`MockBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BusOp {
    /// A command byte (D/C low).
    Command(u8),
    /// A data transfer (D/C high).
    Data(Vec<u8>),
    /// Reset line driven low.
    ResetLow,
    /// Reset line released.
    ResetHigh,
}

/// Error returned by [`MockBus`] once its failure point is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockBusError;

/// Mock LCD bus for testing.
///
/// Every successful operation is appended to [`ops`](Self::ops). The
/// decoding helpers reconstruct windows and pixel streams so tests can
/// assert on what the controller would have received.
///
/// # Example
///
/// ```rust
/// use spi_lcd_clock::hal::{BusOp, MockBus};
/// use spi_lcd_clock::traits::LcdBus;
///
/// let mut bus = MockBus::new();
/// bus.write_command(0x29).unwrap();
/// bus.write_data(&[1, 2]).unwrap();
///
/// assert_eq!(bus.ops, vec![BusOp::Command(0x29), BusOp::Data(vec![1, 2])]);
///
/// bus.fail_after(0);
/// assert!(bus.write_command(0x29).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockBus {
    /// Recorded operations, oldest first.
    pub ops: Vec<BusOp>,
    fail_after: Option<usize>,
}

impl MockBus {
    /// Creates a new mock bus with no recorded operations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every operation fail once `ops.len()` reaches `count`.
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(count);
    }

    /// Forgets recorded operations (the failure point is kept).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Returns the command bytes in order.
    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Decodes every CASET/RASET pair into `(x0, y0, x1, y1)`.
    pub fn windows(&self) -> Vec<(u16, u16, u16, u16)> {
        let mut windows = Vec::new();
        let mut columns = None;
        let mut pending = None;
        for op in &self.ops {
            match op {
                BusOp::Command(c) => pending = Some(*c),
                BusOp::Data(d) if d.len() == 4 => {
                    let lo = u16::from_be_bytes([d[0], d[1]]);
                    let hi = u16::from_be_bytes([d[2], d[3]]);
                    if pending == Some(Command::ColumnAddressSet.opcode()) {
                        columns = Some((lo, hi));
                    } else if pending == Some(Command::RowAddressSet.opcode()) {
                        if let Some((x0, x1)) = columns.take() {
                            windows.push((x0, lo, x1, hi));
                        }
                    }
                    pending = None;
                }
                _ => pending = None,
            }
        }
        windows
    }

    /// Returns every data transfer that followed a RAMWR, in order.
    pub fn data_writes_after_window(&self) -> Vec<&[u8]> {
        let mut writes = Vec::new();
        let mut streaming = false;
        for op in &self.ops {
            match op {
                BusOp::Command(c) => streaming = *c == Command::MemoryWrite.opcode(),
                BusOp::Data(d) if streaming => writes.push(d.as_slice()),
                _ => {}
            }
        }
        writes
    }

    /// Returns all pixel bytes streamed after RAMWR commands, concatenated.
    pub fn pixel_bytes(&self) -> Vec<u8> {
        self.data_writes_after_window().concat()
    }

    fn record(&mut self, op: BusOp) -> Result<(), MockBusError> {
        if self.fail_after.is_some_and(|n| self.ops.len() >= n) {
            return Err(MockBusError);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl LcdBus for MockBus {
    type Error = MockBusError;

    fn write_command(&mut self, command: u8) -> Result<(), MockBusError> {
        self.record(BusOp::Command(command))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), MockBusError> {
        self.record(BusOp::Data(data.to_vec()))
    }

    fn set_reset(&mut self, high: bool) -> Result<(), MockBusError> {
        self.record(if high { BusOp::ResetHigh } else { BusOp::ResetLow })
    }
}

/// Mock delay that records requests instead of sleeping.
///
/// # Example
///
/// ```rust
/// use embedded_hal::delay::DelayNs;
/// use spi_lcd_clock::hal::MockDelay;
///
/// let mut delay = MockDelay::new();
/// delay.delay_ms(120);
/// delay.delay_us(500);
///
/// assert_eq!(delay.ms_calls, vec![120]);
/// assert_eq!(delay.total_ms(), 120);
/// ```
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Millisecond delays requested via `delay_ms`, in order.
    pub ms_calls: Vec<u32>,
    total_ns: u64,
}

impl MockDelay {
    /// Creates a new mock delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay in whole milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.total_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

#[derive(Debug, Default)]
struct ClockState {
    now: Cell<i64>,
    jump: Cell<Option<(u32, i64)>>,
}

/// Mock wall clock for testing.
///
/// Clones share the same time, so a test can keep a handle while the code
/// under test owns another. A jump can be scheduled to land after a number
/// of reads, which simulates an SNTP response arriving mid-poll.
///
/// # Example
///
/// ```rust
/// use spi_lcd_clock::hal::MockWallClock;
/// use spi_lcd_clock::traits::WallClock;
///
/// let clock = MockWallClock::new(0);
/// clock.jump_after_reads(1, 1_700_000_000);
///
/// assert_eq!(clock.unix_time(), 0);
/// assert_eq!(clock.unix_time(), 1_700_000_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockWallClock {
    state: Rc<ClockState>,
}

impl MockWallClock {
    /// Creates a clock reading `unix_time`.
    pub fn new(unix_time: i64) -> Self {
        let clock = Self::default();
        clock.set(unix_time);
        clock
    }

    /// Sets the current time.
    pub fn set(&self, unix_time: i64) {
        self.state.now.set(unix_time);
    }

    /// Advances the current time.
    pub fn advance(&self, secs: i64) {
        self.state.now.set(self.state.now.get() + secs);
    }

    /// After `reads` further reads, the clock jumps to `unix_time`.
    pub fn jump_after_reads(&self, reads: u32, unix_time: i64) {
        self.state.jump.set(Some((reads, unix_time)));
    }
}

impl WallClock for MockWallClock {
    fn unix_time(&self) -> i64 {
        if let Some((reads, target)) = self.state.jump.get() {
            if reads == 0 {
                self.state.now.set(target);
                self.state.jump.set(None);
            } else {
                self.state.jump.set(Some((reads - 1, target)));
            }
        }
        self.state.now.get()
    }
}

// ============================================================================
// Network Mocks
// ============================================================================

/// Error returned by the network mocks when told to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockNetError;

/// Mock Wi-Fi link for testing.
///
/// # Example
///
/// ```rust
/// use spi_lcd_clock::hal::MockWifi;
/// use spi_lcd_clock::traits::WifiLink;
///
/// let mut wifi = MockWifi::failing();
/// assert!(wifi.connect().is_err());
/// assert!(!wifi.is_connected());
/// assert_eq!(wifi.connect_calls, 1);
/// ```
#[derive(Debug, Default)]
pub struct MockWifi {
    /// Whether the link is up.
    pub connected: bool,
    /// Whether `connect` should fail.
    pub fail_connect: bool,
    /// Number of `connect` calls.
    pub connect_calls: usize,
    /// Number of `disconnect` calls.
    pub disconnect_calls: usize,
}

impl MockWifi {
    /// Creates a disconnected link that connects successfully.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a link whose `connect` always fails.
    pub fn failing() -> Self {
        Self {
            fail_connect: true,
            ..Default::default()
        }
    }
}

impl WifiLink for MockWifi {
    type Error = MockNetError;

    fn connect(&mut self) -> Result<(), MockNetError> {
        self.connect_calls += 1;
        if self.fail_connect {
            return Err(MockNetError);
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), MockNetError> {
        self.disconnect_calls += 1;
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Mock SNTP client for testing.
///
/// When linked to a [`MockWallClock`], starting the client schedules the
/// clock to jump to the "network" time after a number of reads.
#[derive(Debug, Default)]
pub struct MockTimeSync {
    /// Whether the client is running.
    pub running: bool,
    /// Whether `start` should fail.
    pub fail_start: bool,
    /// Number of `start` calls.
    pub start_calls: usize,
    /// Number of `stop` calls.
    pub stop_calls: usize,
    link: Option<(MockWallClock, u32, i64)>,
}

impl MockTimeSync {
    /// Creates a client that starts successfully but never sets the time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client that sets `clock` to `unix_time` after `reads` polls.
    pub fn setting(clock: &MockWallClock, reads: u32, unix_time: i64) -> Self {
        Self {
            link: Some((clock.clone(), reads, unix_time)),
            ..Default::default()
        }
    }
}

impl TimeSync for MockTimeSync {
    type Error = MockNetError;

    fn start(&mut self) -> Result<(), MockNetError> {
        self.start_calls += 1;
        if self.fail_start {
            return Err(MockNetError);
        }
        self.running = true;
        if let Some((clock, reads, time)) = &self.link {
            clock.jump_after_reads(*reads, *time);
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.stop_calls += 1;
        self.running = false;
    }
}

// ============================================================================
// Tests
// ============================================================================
