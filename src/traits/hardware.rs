//! Hardware abstraction traits for the LCD bus and the wall clock.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`LcdBus`] | Command/data transfers and reset line of an SPI display |
//! | [`WallClock`] | Calendar time source (seconds since the Unix epoch) |
//!
//! Delays use [`embedded_hal::delay::DelayNs`] directly, so any HAL delay
//! (including `esp_idf_hal::delay::FreeRtos`) plugs in unchanged.
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. Real hardware goes through
//! [`crate::hal::SpiLcdBus`], which works over any `embedded-hal` 1.0
//! `SpiDevice` + `OutputPin` pair.
//!
//! # Example
//!
//! ```rust
//! use spi_lcd_clock::hal::{BusOp, MockBus, MockDelay};
//! use spi_lcd_clock::traits::LcdBus;
//!
//! let mut bus = MockBus::new();
//! let mut delay = MockDelay::new();
//!
//! bus.reset(&mut delay).unwrap();
//! bus.write_command(0x11).unwrap();
//!
//! assert_eq!(bus.ops[0], BusOp::ResetLow);
//! assert_eq!(delay.total_ms(), 100);
//! ```

use embedded_hal::delay::DelayNs;

/// Minimum time the reset line is held in each state, in milliseconds.
///
/// The controller ignores a shorter pulse and may come up unresponsive.
pub const RESET_HOLD_MS: u32 = 50;

/// Raw transport to a display controller.
///
/// The data/command line selects whether the bytes that follow are
/// interpreted as a command opcode or as its parameters/pixel data.
/// Every call blocks until the bytes are on the wire.
///
/// # Implementation Notes
///
/// - `write_command` drives D/C low, `write_data` drives it high
/// - Chip-select framing belongs to the implementation
/// - `write_data` with an empty slice must be accepted
pub trait LcdBus {
    /// Error type for bus operations.
    type Error;

    /// Sends a single command byte with D/C low.
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Sends parameter or pixel bytes with D/C high.
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Drives the controller's reset line (`true` = released/high).
    fn set_reset(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Hardware reset: low for [`RESET_HOLD_MS`], then high for [`RESET_HOLD_MS`].
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.set_reset(false)?;
        delay.delay_ms(RESET_HOLD_MS);
        self.set_reset(true)?;
        delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }
}

impl<B: LcdBus + ?Sized> LcdBus for &mut B {
    type Error = B::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        B::write_command(self, command)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        B::write_data(self, data)
    }

    fn set_reset(&mut self, high: bool) -> Result<(), Self::Error> {
        B::set_reset(self, high)
    }
}

/// Calendar time source.
///
/// Unlike a monotonic timer this can jump, e.g. when SNTP sets the system
/// time. Before the first sync it typically reports a time near 1970.
///
/// # Example
///
/// ```rust
/// use spi_lcd_clock::traits::WallClock;
/// use spi_lcd_clock::hal::MockWallClock;
///
/// let clock = MockWallClock::new(1_700_000_000);
/// assert_eq!(clock.unix_time(), 1_700_000_000);
///
/// clock.advance(60);
/// assert_eq!(clock.unix_time(), 1_700_000_060);
/// ```
pub trait WallClock {
    /// Returns seconds since 1970-01-01T00:00:00Z.
    fn unix_time(&self) -> i64;
}
