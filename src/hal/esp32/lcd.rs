//! SPI LCD bring-up for ESP32.
//!
//! # Wiring
//!
//! - MOSI → GPIO4
//! - SCLK → GPIO5
//! - CS → GPIO6
//! - D/C → GPIO7
//! - RST → GPIO8
//! - VCC → 3.3V, GND → GND, backlight tied high

use crate::config::DisplayConfig;
use crate::hal::SpiLcdBus;
use crate::lcd::Lcd;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Output, PinDriver};
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::spi::config::{Config as SpiConfig, DriverConfig, MODE_0};
use esp_idf_hal::spi::{Dma, SpiAnyPins, SpiDeviceDriver, SpiDriver};
use esp_idf_hal::units::Hertz;

/// Largest single DMA transfer in bytes. A full glyph is 128 bytes and a
/// solid-fill chunk is 320, so this is never the limit.
pub const MAX_TRANSFER_SIZE: usize = 4096;

/// Bus type produced by [`init_lcd`].
pub type Esp32LcdBus<'d> = SpiLcdBus<
    SpiDeviceDriver<'d, SpiDriver<'d>>,
    PinDriver<'d, AnyOutputPin, Output>,
    PinDriver<'d, AnyOutputPin, Output>,
>;

/// Driver type produced by [`init_lcd`].
pub type Esp32Lcd<'d> = Lcd<Esp32LcdBus<'d>, FreeRtos>;

/// GPIOs wired to the LCD.
///
/// The reference board uses:
///
/// | Signal | GPIO |
/// |--------|------|
/// | SCLK   | 5    |
/// | MOSI   | 4    |
/// | CS     | 6    |
/// | D/C    | 7    |
/// | RST    | 8    |
pub struct LcdPins {
    /// SPI clock
    pub sclk: AnyOutputPin,
    /// SPI data out (LCD SDA/DIN)
    pub mosi: AnyOutputPin,
    /// Chip select, active low
    pub cs: AnyOutputPin,
    /// Data/command select (low = command)
    pub dc: AnyOutputPin,
    /// Controller reset, active low
    pub rst: AnyOutputPin,
}

/// Configures the SPI host and runs the LCD power-on sequence.
///
/// SPI runs in mode 0 at [`DisplayConfig::spi_clock_hz`] with a single
/// in-flight transaction, so every write has completed when it returns.
///
/// # Errors
///
/// Returns an error if the SPI host, a GPIO, or any power-on transfer fails.
pub fn init_lcd<'d, SPI: SpiAnyPins>(
    spi: impl Peripheral<P = SPI> + 'd,
    pins: LcdPins,
    config: &DisplayConfig,
) -> anyhow::Result<Esp32Lcd<'d>> {
    let driver = SpiDriver::new(
        spi,
        pins.sclk,
        pins.mosi,
        Option::<AnyIOPin>::None,
        &DriverConfig::new().dma(Dma::Auto(MAX_TRANSFER_SIZE)),
    )?;

    let device = SpiDeviceDriver::new(
        driver,
        Some(pins.cs),
        &SpiConfig::new()
            .baudrate(Hertz(config.spi_clock_hz))
            .data_mode(MODE_0)
            .queue_size(1),
    )?;

    let dc = PinDriver::output(pins.dc)?;
    let rst = PinDriver::output(pins.rst)?;

    log::info!("[LCD] SPI up at {} Hz, resetting panel", config.spi_clock_hz);

    let mut lcd = Lcd::new(SpiLcdBus::new(device, dc, rst), FreeRtos)
        .with_memory_access(config.memory_access);
    lcd.power_on_sequence()?;

    log::info!("[LCD] Ready");
    Ok(lcd)
}
