//! [`LcdBus`] over `embedded-hal` 1.0 SPI and GPIO traits.
//!
//! This is the only transport the driver needs on real hardware: the ESP32
//! build plugs `SpiDeviceDriver` and `PinDriver` into it, and any other HAL
//! with `embedded-hal` 1.0 support works the same way.
//!
//! # Wiring
//!
//! - SCLK/MOSI/CS → owned by the `SpiDevice` (CS framed per transfer)
//! - D/C → `dc` output (low = command, high = data)
//! - RST → `rst` output (active low)
//!
//! The link is write-only; MISO is not used.

use crate::traits::LcdBus;
use core::fmt;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::spi::SpiDevice;

/// Transport error: either the SPI transfer or a control line failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusError<S, P> {
    /// SPI transfer failed.
    Spi(S),
    /// D/C or RST line could not be driven.
    Pin(P),
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for BusError<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Spi(e) => write!(f, "SPI transfer failed: {e:?}"),
            BusError::Pin(e) => write!(f, "control line failed: {e:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<S: fmt::Debug, P: fmt::Debug> std::error::Error for BusError<S, P> {}

/// SPI display transport with D/C and reset lines.
///
/// # Example
///
/// ```ignore
/// use spi_lcd_clock::hal::SpiLcdBus;
/// use spi_lcd_clock::lcd::Lcd;
///
/// let bus = SpiLcdBus::new(spi_device, dc_pin, rst_pin);
/// let mut lcd = Lcd::init(bus, delay)?;
/// ```
pub struct SpiLcdBus<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST> SpiLcdBus<SPI, DC, RST> {
    /// Bundles an SPI device with its D/C and reset outputs.
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Returns the SPI device and pins.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, P> LcdBus for SpiLcdBus<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin<Error = P>,
    RST: OutputPin<Error = P>,
{
    type Error = BusError<SPI::Error, P>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(BusError::Pin)?;
        self.spi.write(&[command]).map_err(BusError::Spi)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(BusError::Pin)?;
        self.spi.write(data).map_err(BusError::Spi)
    }

    fn set_reset(&mut self, high: bool) -> Result<(), Self::Error> {
        self.rst.set_state(PinState::from(high)).map_err(BusError::Pin)
    }
}
