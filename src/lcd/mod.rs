//! Framebuffer-less driver for a 160x128 RGB565 SPI LCD.
//!
//! The driver never holds an image of the screen. Every primitive sets the
//! controller's addressing window and immediately streams exactly as many
//! pixels as the window covers; the controller's cursor advances row-major
//! inside that window.
//!
//! # Layers
//!
//! - [`LcdBus`]: raw command/data transfers (see [`crate::traits`])
//! - [`controller`]: power-on sequence and window commands
//! - [`draw`]: bounds-checked rendering primitives
//! - [`glyph`]: the 8x8 font
//!
//! # Bounds policy
//!
//! Out-of-range or inverted coordinates make a primitive a silent no-op: it
//! returns `Ok(())` without touching the bus. Lines are the exception and
//! clamp to the screen instead. Only transport failures surface as errors.
//!
//! # Example
//!
//! ```rust
//! use spi_lcd_clock::hal::{MockBus, MockDelay};
//! use spi_lcd_clock::lcd::{Color, Lcd};
//!
//! let mut lcd = Lcd::init(MockBus::new(), MockDelay::new()).unwrap();
//! lcd.clear(Color::BLACK).unwrap();
//! lcd.draw_text("12:34", 10, 10, Color::WHITE, Color::BLACK).unwrap();
//!
//! // Off-screen draws issue no transactions
//! lcd.bus_mut().clear_ops();
//! lcd.draw_pixel(160, 0, Color::RED).unwrap();
//! assert!(lcd.bus().ops.is_empty());
//! ```
//!
//! [`LcdBus`]: crate::traits::LcdBus

pub mod color;
pub mod controller;
pub mod draw;
pub mod glyph;

pub use color::Color;
pub use controller::Command;
pub use glyph::{Glyph, GLYPH_SIZE, SUPPORTED_CHARS};

use crate::traits::LcdBus;
use embedded_hal::delay::DelayNs;

/// Screen width in pixels (landscape).
pub const WIDTH: i32 = 160;

/// Screen height in pixels (landscape).
pub const HEIGHT: i32 = 128;

/// Driver handle: exclusive owner of the bus and its delay source.
///
/// Create it once at boot with [`Lcd::init`] and pass it by `&mut` to
/// whatever draws. There is no teardown; [`release`](Self::release) exists
/// for tests and bus sharing experiments.
pub struct Lcd<B, D> {
    bus: B,
    delay: D,
    memory_access: u8,
}

impl<B: LcdBus, D: DelayNs> Lcd<B, D> {
    /// Wraps a bus without touching the hardware.
    ///
    /// Call [`power_on_sequence`](Self::power_on_sequence) before drawing,
    /// or use [`init`](Self::init) which does both.
    pub fn new(bus: B, delay: D) -> Self {
        Self {
            bus,
            delay,
            memory_access: controller::MADCTL_LANDSCAPE,
        }
    }

    /// Wraps the bus and runs the power-on sequence.
    ///
    /// # Errors
    ///
    /// Returns the bus error if any transfer of the sequence fails.
    pub fn init(bus: B, delay: D) -> Result<Self, B::Error> {
        let mut lcd = Self::new(bus, delay);
        lcd.power_on_sequence()?;
        Ok(lcd)
    }

    /// Overrides the MADCTL value sent during power-on (scan direction, RGB/BGR order).
    pub fn with_memory_access(mut self, madctl: u8) -> Self {
        self.memory_access = madctl;
        self
    }

    /// Returns the underlying bus.
    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Returns the underlying bus mutably.
    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the driver, returning the bus and delay.
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}
