//! # spi-lcd-clock
//!
//! A network-synchronized clock on a 160x128 RGB565 SPI LCD, built on a
//! small framebuffer-less display driver.
//!
//! ## Features
//!
//! - **Hardware abstraction**: Traits for the LCD bus, wall clock, Wi-Fi and SNTP
//! - **No framebuffer**: Every primitive addresses a window and streams pixels straight out
//! - **Built-in font**: 8x8 glyphs for digits, `:` and a handful of letters
//! - **Changed-field redraw**: Only the `HH`, `MM` or `SS` that changed is repainted
//! - **Periodic resync**: Wi-Fi is brought up only while SNTP sets the clock
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware and network abstractions
//! - `lcd` - Controller protocol, glyph table and rendering primitives
//! - `clock` - Time formatting, clock face and sync scheduling
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use spi_lcd_clock::{
//!     hal::{MockBus, MockDelay},
//!     Color, Lcd,
//! };
//!
//! // Power on a display attached to a mock bus
//! let mut lcd = Lcd::init(MockBus::new(), MockDelay::new()).unwrap();
//!
//! // Draw a time string
//! lcd.clear(Color::BLACK).unwrap();
//! lcd.draw_text("12:34:56", 44, 60, Color::WHITE, Color::BLACK).unwrap();
//!
//! // Lines clamp to the screen, other primitives skip when out of range
//! lcd.draw_hline(-10, 500, 0, Color::RED).unwrap();
//! lcd.draw_pixel(-1, 0, Color::RED).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Clock application: time formatting, face rendering and sync scheduling.
pub mod clock;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Framebuffer-less driver for the SPI LCD.
pub mod lcd;
/// Core traits for hardware and network abstraction.
pub mod traits;

/// Shared configuration system for desktop and ESP32.
pub mod config;

// Re-exports for convenience
pub use clock::{
    ClockApp, ClockFace, ClockLayout, SyncOutcome, SyncSchedule, TimeOfDay, TimeSynchronizer,
    MIN_VALID_UNIX_TIME,
};
pub use lcd::{Color, Command, Glyph, Lcd, GLYPH_SIZE, HEIGHT, SUPPORTED_CHARS, WIDTH};
pub use traits::{Canvas, LcdBus, TimeSync, WallClock, WifiLink};

pub use config::{ClockConfig, Config, DisplayConfig, SntpConfig, WifiConfig};
