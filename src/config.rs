//! Shared configuration for desktop and ESP32.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use spi_lcd_clock::config::{Config, SntpConfig, WifiConfig};
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.sntp.sync_interval_secs(), 30 * 60);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_wifi(WifiConfig::default().with_ssid("HomeWifi").with_password("secret"))
//!     .with_sntp(SntpConfig::default().with_server("time.google.com").with_utc_offset_secs(0));
//! ```

use crate::lcd::controller::MADCTL_LANDSCAPE;
use crate::lcd::Color;
use heapless::String as HString;

/// Maximum length for short config strings (SSIDs, hostnames)
pub const MAX_SHORT_STRING: usize = 64;

/// Maximum length for longer config strings
pub const MAX_LONG_STRING: usize = 128;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Type alias for longer config strings
pub type LongString = HString<MAX_LONG_STRING>;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    let _ = hs.push_str(&s[..char_boundary(s, MAX_SHORT_STRING)]);
    hs
}

/// Create a LongString from a &str, truncating if too long
pub fn long_string(s: &str) -> LongString {
    let mut hs = LongString::new();
    let _ = hs.push_str(&s[..char_boundary(s, MAX_LONG_STRING)]);
    hs
}

// Largest UTF-8 boundary not past `max` bytes.
fn char_boundary(s: &str, max: usize) -> usize {
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= max)
        .last()
        .unwrap_or(0)
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// WiFi connection configuration
    pub wifi: WifiConfig,
    /// Network time configuration
    pub sntp: SntpConfig,
    /// Display configuration
    pub display: DisplayConfig,
    /// Main loop configuration
    pub clock: ClockConfig,
}

impl Config {
    /// Set WiFi configuration
    pub fn with_wifi(mut self, wifi: WifiConfig) -> Self {
        self.wifi = wifi;
        self
    }

    /// Set SNTP configuration
    pub fn with_sntp(mut self, sntp: SntpConfig) -> Self {
        self.sntp = sntp;
        self
    }

    /// Set display configuration
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Set main loop configuration
    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }
}

// ============================================================================
// WiFi Config
// ============================================================================

/// WiFi connection configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WifiConfig {
    /// WiFi network SSID
    pub ssid: ShortString,
    /// WiFi password
    pub password: ShortString,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u32,
    /// Whether the clock may bring WiFi up to sync time
    pub enabled: bool,
}

impl Default for WifiConfig {
    fn default() -> Self {
        Self {
            ssid: ShortString::new(),
            password: ShortString::new(),
            connect_timeout_ms: 60_000,
            enabled: true,
        }
    }
}

impl WifiConfig {
    /// Set the SSID
    pub fn with_ssid(mut self, ssid: &str) -> Self {
        self.ssid = short_string(ssid);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = short_string(password);
        self
    }

    /// Set the connection timeout
    pub fn with_connect_timeout_ms(mut self, ms: u32) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Enable or disable WiFi
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check if WiFi credentials are configured
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

// ============================================================================
// SNTP Config
// ============================================================================

/// Network time configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SntpConfig {
    /// NTP server hostname
    pub server: LongString,
    /// Minutes between re-syncs
    pub sync_interval_min: u32,
    /// How many times to re-check the clock after starting SNTP
    pub max_attempts: u32,
    /// Wait between clock checks in milliseconds
    pub attempt_interval_ms: u32,
    /// Fixed offset of local time from UTC, in seconds (UTC+2 = 7200)
    pub utc_offset_secs: i32,
}

impl Default for SntpConfig {
    fn default() -> Self {
        Self {
            server: long_string("pool.ntp.org"),
            sync_interval_min: 30,
            max_attempts: 10,
            attempt_interval_ms: 2000,
            utc_offset_secs: 2 * 3600,
        }
    }
}

impl SntpConfig {
    /// Set the NTP server
    pub fn with_server(mut self, server: &str) -> Self {
        self.server = long_string(server);
        self
    }

    /// Set the re-sync interval
    pub fn with_sync_interval_min(mut self, minutes: u32) -> Self {
        self.sync_interval_min = minutes;
        self
    }

    /// Set the polling budget
    pub fn with_attempts(mut self, max_attempts: u32, interval_ms: u32) -> Self {
        self.max_attempts = max_attempts;
        self.attempt_interval_ms = interval_ms;
        self
    }

    /// Set the UTC offset
    pub fn with_utc_offset_secs(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }

    /// Re-sync interval in seconds
    pub fn sync_interval_secs(&self) -> i64 {
        i64::from(self.sync_interval_min) * 60
    }
}

// ============================================================================
// Display Config
// ============================================================================

/// Display configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// SPI clock in Hz
    pub spi_clock_hz: u32,
    /// MADCTL byte sent during power-on (orientation and color order)
    pub memory_access: u8,
    /// Digit color
    pub foreground: Color,
    /// Screen color
    pub background: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spi_clock_hz: 15_000_000,
            memory_access: MADCTL_LANDSCAPE,
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

impl DisplayConfig {
    /// Set the SPI clock
    pub fn with_spi_clock_hz(mut self, hz: u32) -> Self {
        self.spi_clock_hz = hz;
        self
    }

    /// Set the MADCTL byte
    pub fn with_memory_access(mut self, madctl: u8) -> Self {
        self.memory_access = madctl;
        self
    }

    /// Set foreground and background colors
    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }
}

// ============================================================================
// Clock Config
// ============================================================================

/// Main loop configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Delay between display refreshes in milliseconds
    pub refresh_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { refresh_ms: 100 }
    }
}

impl ClockConfig {
    /// Set the refresh interval
    pub fn with_refresh_ms(mut self, ms: u32) -> Self {
        self.refresh_ms = ms;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
