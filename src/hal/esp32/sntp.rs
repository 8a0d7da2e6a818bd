//! SNTP client for ESP32 using esp-idf-svc.

use crate::config::{LongString, SntpConfig};
use crate::traits::TimeSync;
use esp_idf_svc::sntp::{EspSntp, SntpConf};
use esp_idf_svc::sys::EspError;

/// SNTP client that sets the system clock.
///
/// The ESP-IDF client runs for as long as the handle lives, so `stop`
/// simply drops it.
pub struct Esp32Sntp {
    server: LongString,
    sntp: Option<EspSntp<'static>>,
}

impl Esp32Sntp {
    /// Creates a stopped client for the configured server.
    pub fn new(config: &SntpConfig) -> Self {
        Self {
            server: config.server.clone(),
            sntp: None,
        }
    }
}

impl TimeSync for Esp32Sntp {
    type Error = EspError;

    fn start(&mut self) -> Result<(), EspError> {
        if self.sntp.is_some() {
            return Ok(());
        }

        let mut conf = SntpConf::default();
        conf.servers[0] = self.server.as_str();
        let sntp = EspSntp::new(&conf)?;

        log::info!("[SNTP] Polling {}", self.server);
        self.sntp = Some(sntp);
        Ok(())
    }

    fn stop(&mut self) {
        if self.sntp.take().is_some() {
            log::info!("[SNTP] Stopped");
        }
    }
}
