//! WiFi station link for ESP32-C3.
//!
//! Provides a synchronous station-mode link using esp-idf-svc. The radio is
//! only started for the duration of a time sync.
//!
//! # Example
//!
//! ```ignore
//! use spi_lcd_clock::hal::esp32::Esp32Wifi;
//! use spi_lcd_clock::config::WifiConfig;
//! use spi_lcd_clock::traits::WifiLink;
//!
//! let config = WifiConfig::default()
//!     .with_ssid("MyNetwork")
//!     .with_password("secret123");
//!
//! let mut wifi = Esp32Wifi::new(modem, sysloop, nvs, &config)?;
//! wifi.connect()?;
//! log::info!("IP: {:?}", wifi.ip_addr());
//! wifi.disconnect()?;
//! ```

use crate::config::WifiConfig;
use crate::traits::WifiLink;
use core::time::Duration;
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::sys::EspError;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use std::net::Ipv4Addr;

/// WiFi link for ESP32.
///
/// Construction configures station mode but leaves the radio off;
/// [`WifiLink::connect`] brings it up.
pub struct Esp32Wifi<'a> {
    wifi: BlockingWifi<EspWifi<'a>>,
    connect_timeout: Duration,
}

impl<'a> Esp32Wifi<'a> {
    /// Creates the WiFi driver and applies the station configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver cannot be created or the SSID or
    /// password does not fit the driver's limits.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: Option<EspDefaultNvsPartition>,
        config: &WifiConfig,
    ) -> anyhow::Result<Self> {
        let esp_wifi = EspWifi::new(modem, sysloop.clone(), nvs)?;
        let mut wifi = BlockingWifi::wrap(esp_wifi, sysloop)?;

        let ssid = config
            .ssid
            .as_str()
            .try_into()
            .map_err(|_| anyhow::anyhow!("SSID too long: {}", config.ssid))?;
        let password = config
            .password
            .as_str()
            .try_into()
            .map_err(|_| anyhow::anyhow!("WiFi password too long"))?;

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid,
            password,
            ..Default::default()
        }))?;

        Ok(Self {
            wifi,
            connect_timeout: Duration::from_millis(u64::from(config.connect_timeout_ms)),
        })
    }

    /// Get the current IP address, if connected.
    pub fn ip_addr(&self) -> Option<Ipv4Addr> {
        self.wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .ok()
            .map(|info| info.ip)
    }
}

impl WifiLink for Esp32Wifi<'_> {
    type Error = EspError;

    fn connect(&mut self) -> Result<(), EspError> {
        if self.is_connected() {
            return Ok(());
        }

        log::info!("[WiFi] Starting...");
        self.wifi.start()?;

        log::info!("[WiFi] Connecting...");
        self.wifi.connect()?;

        log::info!("[WiFi] Waiting for DHCP...");
        let wifi = &self.wifi;
        wifi.ip_wait_while(|| wifi.is_up().map(|up| !up), Some(self.connect_timeout))?;

        if let Some(ip) = self.ip_addr() {
            log::info!("[WiFi] Connected! IP: {}", ip);
        }
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), EspError> {
        if self.wifi.is_connected()? {
            self.wifi.disconnect()?;
        }
        if self.wifi.is_started()? {
            self.wifi.stop()?;
        }
        log::info!("[WiFi] Stopped");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }
}
