//! Trait definitions for hardware, network, and display abstraction.
//!
//! This module defines the core abstractions that allow the clock to:
//! - Run on different hardware (ESP32, desktop mock)
//! - Swap the network stack used for time synchronization
//! - Render the clock face onto any text-capable surface
//!
//! # Submodules
//!
//! - `hardware`: LCD bus transport, wall clock
//! - `network`: Wi-Fi link and SNTP client traits
//! - `display`: Text canvas used by the clock face

pub mod display;
pub mod hardware;
pub mod network;

pub use display::*;
pub use hardware::*;
pub use network::*;
