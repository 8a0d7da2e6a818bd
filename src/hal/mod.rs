//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `spi`: [`LcdBus`](crate::traits::LcdBus) over any `embedded-hal` 1.0 SPI device
//! - `mock`: Test implementations for desktop development
//! - `esp32`: ESP32-C3 display, Wi-Fi, SNTP and clock (requires `esp32` feature)

pub mod mock;
pub mod spi;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;
pub use spi::{BusError, SpiLcdBus};

#[cfg(feature = "esp32")]
pub use esp32::*;
