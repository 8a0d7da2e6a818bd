//! ESP32-C3 hardware abstraction layer for the SPI LCD clock.
//!
//! This module provides hardware implementations for an ESP32-C3 board
//! driving a 160x128 ST7735-class LCD and fetching time over Wi-Fi.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 (RISC-V 160MHz)
//! - **Display**: 160x128 RGB565 LCD, 4-wire SPI (write-only)
//! - **Network**: on-chip Wi-Fi, station mode, SNTP
//!
//! # Pin Assignments
//!
//! See [`LcdPins`] for the GPIO assignments.

mod clock;
mod lcd;

pub use clock::Esp32WallClock;
pub use lcd::{init_lcd, Esp32Lcd, Esp32LcdBus, LcdPins, MAX_TRANSFER_SIZE};

#[cfg(feature = "wifi")]
mod sntp;
#[cfg(feature = "wifi")]
pub use sntp::Esp32Sntp;

#[cfg(feature = "wifi")]
mod wifi;
#[cfg(feature = "wifi")]
pub use wifi::Esp32Wifi;
