//! ESP32 wall clock backed by the system time SNTP sets.

use crate::traits::WallClock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Calendar time from the ESP-IDF system clock.
///
/// Reads close to 1970 until SNTP has set the time.
///
/// # Example
///
/// ```ignore
/// use spi_lcd_clock::hal::esp32::Esp32WallClock;
/// use spi_lcd_clock::traits::WallClock;
///
/// let clock = Esp32WallClock::new();
/// log::info!("now: {}", clock.unix_time());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Esp32WallClock;

impl Esp32WallClock {
    /// Creates a new ESP32 wall clock instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for Esp32WallClock {
    fn unix_time(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}
