//! ESP32-C3 network-synchronized desk clock.
//!
//! This is the main entry point for the hardware clock. It:
//! - Brings up the 160x128 SPI LCD and draws the static layout
//! - Syncs the system time over Wi-Fi + SNTP at boot and every 30 minutes
//! - Redraws the changed `HH:MM:SS` fields every 100 ms
//!
//! # Build
//!
//! ```bash
//! WIFI_SSID=MyNetwork WIFI_PASSWORD=secret \
//!     cargo build --release --features wifi --bin esp32_main
//!
//! # Flash and monitor
//! espflash flash --monitor target/riscv32imc-esp-espidf/release/esp32_main
//! ```

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::OutputPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::log::EspLogger;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use spi_lcd_clock::hal::esp32::{init_lcd, Esp32Sntp, Esp32WallClock, Esp32Wifi, LcdPins};
use spi_lcd_clock::{ClockApp, Config, TimeSynchronizer, WifiConfig};

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    EspLogger::initialize_default();

    log::info!("================================");
    log::info!("  spi-lcd-clock");
    log::info!("================================");

    // =========================================================================
    // Configuration
    // =========================================================================
    let wifi_config = WifiConfig::default()
        .with_ssid(option_env!("WIFI_SSID").unwrap_or(""))
        .with_password(option_env!("WIFI_PASSWORD").unwrap_or(""));
    let configured = wifi_config.is_configured();
    let config = Config::default().with_wifi(wifi_config.with_enabled(configured));

    if !configured {
        log::warn!("[SKIP] WiFi not configured (set WIFI_SSID/WIFI_PASSWORD); time will not sync");
    }

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize LCD (SPI2 on GPIO4-8)
    // =========================================================================
    // MOSI 4, SCLK 5, CS 6, DC 7, RST 8
    let pins = LcdPins {
        mosi: peripherals.pins.gpio4.downgrade_output(),
        sclk: peripherals.pins.gpio5.downgrade_output(),
        cs: peripherals.pins.gpio6.downgrade_output(),
        dc: peripherals.pins.gpio7.downgrade_output(),
        rst: peripherals.pins.gpio8.downgrade_output(),
    };
    let lcd = init_lcd(peripherals.spi2, pins, &config.display)?;
    log::info!("[OK] LCD initialized (GPIO4-8 SPI)");

    // =========================================================================
    // Initialize WiFi + SNTP
    // =========================================================================
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let wifi = Esp32Wifi::new(peripherals.modem, sysloop, Some(nvs), &config.wifi)?;
    let sntp = Esp32Sntp::new(&config.sntp);
    log::info!("[OK] Network configured (server {})", config.sntp.server);

    let sync = TimeSynchronizer::new(wifi, sntp, Esp32WallClock::new(), FreeRtos, &config.sntp);

    // =========================================================================
    // Main Loop
    // =========================================================================
    let mut app = ClockApp::new(lcd, sync, &config);
    let outcome = app.start()?;
    log::info!("[OK] Boot sync: {:?}", outcome);

    loop {
        app.tick()?;
        FreeRtos::delay_ms(config.clock.refresh_ms);
    }
}
