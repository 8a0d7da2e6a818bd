//! Network abstraction traits for Wi-Fi and SNTP time synchronization.
//!
//! The clock only needs the network long enough to set the system time, so
//! both traits model short-lived sessions rather than persistent services.
//!
//! # Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`WifiLink`] | Station-mode association, brought up and torn down per sync |
//! | [`TimeSync`] | Background SNTP client that sets the system clock |
//!
//! # Sync Session
//!
//! ```text
//! WifiLink::connect ─► TimeSync::start ─► poll WallClock ─► TimeSync::stop ─► WifiLink::disconnect
//! ```
//!
//! See [`crate::clock::TimeSynchronizer`] for the driver of this sequence.

/// Wi-Fi station link.
///
/// # Implementation Notes
///
/// - `connect` blocks until the interface has an address or fails
/// - `connect` on an already connected link should succeed without side effects
/// - `disconnect` on a disconnected link should succeed
///
/// # Example
///
/// ```rust
/// use spi_lcd_clock::traits::WifiLink;
/// use spi_lcd_clock::hal::MockWifi;
///
/// let mut wifi = MockWifi::new();
/// wifi.connect().unwrap();
/// assert!(wifi.is_connected());
/// wifi.disconnect().unwrap();
/// assert!(!wifi.is_connected());
/// ```
pub trait WifiLink {
    /// Error type for link operations.
    type Error: core::fmt::Debug;

    /// Associates with the configured access point and waits for DHCP.
    fn connect(&mut self) -> Result<(), Self::Error>;

    /// Drops the association and stops the radio.
    fn disconnect(&mut self) -> Result<(), Self::Error>;

    /// Returns true while associated with an address.
    fn is_connected(&self) -> bool;
}

/// SNTP client.
///
/// Starting the client kicks off polling in the background; the system
/// clock (observed through [`WallClock`](crate::traits::WallClock)) jumps
/// once a response arrives.
pub trait TimeSync {
    /// Error type for client operations.
    type Error: core::fmt::Debug;

    /// Starts polling the configured NTP server.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Stops the client. Must be safe to call when not started.
    fn stop(&mut self);
}
