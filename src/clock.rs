//! Clock application: time formatting, changed-digit redraw, and periodic
//! network time synchronization.
//!
//! Everything here is hardware-agnostic and runs against the traits in
//! [`crate::traits`], so the whole application loop can be exercised on a
//! desktop with the mocks from [`crate::hal::mock`].
//!
//! # Example
//!
//! ```rust
//! use spi_lcd_clock::clock::{ClockApp, TimeSynchronizer};
//! use spi_lcd_clock::hal::{MockBus, MockDelay, MockTimeSync, MockWallClock, MockWifi};
//! use spi_lcd_clock::lcd::Lcd;
//! use spi_lcd_clock::Config;
//!
//! let config = Config::default();
//! let clock = MockWallClock::new(0);
//! let sntp = MockTimeSync::setting(&clock, 0, 1_700_000_000);
//! let sync = TimeSynchronizer::new(MockWifi::new(), sntp, clock.clone(), MockDelay::new(), &config.sntp);
//! let lcd = Lcd::new(MockBus::new(), MockDelay::new());
//!
//! let mut app = ClockApp::new(lcd, sync, &config);
//! app.start().unwrap();
//! assert!(app.schedule().is_synced());
//!
//! // First tick draws all three fields
//! assert_eq!(app.tick().unwrap(), 3);
//! ```

use crate::config::{Config, SntpConfig};
use crate::lcd::Color;
use crate::traits::{Canvas, TimeSync, WallClock, WifiLink};
use core::fmt::Write;
use embedded_hal::delay::DelayNs;

/// 2023-01-01T00:00:00Z. Anything earlier means the clock was never set.
pub const MIN_VALID_UNIX_TIME: i64 = 1_672_531_200;

const SECS_PER_DAY: i64 = 86_400;

/// Two-character text of one clock field.
pub type FieldText = heapless::String<2>;

// ============================================================================
// Time of Day
// ============================================================================

/// Local wall-clock time, to the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl TimeOfDay {
    /// Converts Unix seconds to local time at a fixed UTC offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use spi_lcd_clock::clock::TimeOfDay;
    ///
    /// // 1970-01-01 00:00:00 UTC shown at UTC+2
    /// let t = TimeOfDay::from_unix(0, 2 * 3600);
    /// assert_eq!((t.hour, t.minute, t.second), (2, 0, 0));
    ///
    /// // Negative offsets wrap to the previous day
    /// let t = TimeOfDay::from_unix(0, -1);
    /// assert_eq!((t.hour, t.minute, t.second), (23, 59, 59));
    /// ```
    pub fn from_unix(unix_secs: i64, utc_offset_secs: i32) -> Self {
        let secs = unix_secs
            .saturating_add(i64::from(utc_offset_secs))
            .rem_euclid(SECS_PER_DAY);
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    /// Returns hour, minute and second as zero-padded two-digit strings.
    pub fn fields(&self) -> [FieldText; 3] {
        [
            two_digits(self.hour),
            two_digits(self.minute),
            two_digits(self.second),
        ]
    }
}

fn two_digits(value: u8) -> FieldText {
    let mut text = FieldText::new();
    let _ = write!(text, "{:02}", value % 100);
    text
}

// ============================================================================
// Clock Face
// ============================================================================

/// Pixel positions of the clock fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockLayout {
    /// Left edge of each field: hour, minute, second.
    pub field_x: [i32; 3],
    /// Left edge of the two colon separators.
    pub colon_x: [i32; 2],
    /// Top edge of the whole row.
    pub y: i32,
}

impl ClockLayout {
    /// Layout centered on a `width`x`height` screen.
    pub const fn centered(width: i32, height: i32) -> Self {
        let cx = width / 2;
        let cy = height / 2;
        Self {
            field_x: [cx - 30, cx + 5, cx + 40],
            colon_x: [cx - 5, cx + 22],
            y: cy,
        }
    }
}

/// Renders `HH:MM:SS`, redrawing only the fields that changed.
#[derive(Clone, Debug)]
pub struct ClockFace {
    layout: ClockLayout,
    fg: Color,
    bg: Color,
    shown: [FieldText; 3],
}

impl ClockFace {
    /// Creates a face with nothing drawn yet.
    pub fn new(layout: ClockLayout, fg: Color, bg: Color) -> Self {
        Self {
            layout,
            fg,
            bg,
            shown: blank_fields(),
        }
    }

    /// Returns the field texts currently on screen.
    pub fn shown(&self) -> &[FieldText; 3] {
        &self.shown
    }

    /// Clears the canvas and draws the colon separators.
    ///
    /// Forgets what was shown, so the next [`update`](Self::update)
    /// redraws every field.
    pub fn draw_static<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.clear(self.bg)?;
        for x in self.layout.colon_x {
            canvas.draw_text(":", x, self.layout.y, self.fg, self.bg)?;
        }
        self.shown = blank_fields();
        Ok(())
    }

    /// Redraws the fields that differ from what is on screen.
    ///
    /// A changed field is first overdrawn in background color, then drawn
    /// in the foreground color. Returns the number of fields redrawn.
    pub fn update<C: Canvas>(
        &mut self,
        canvas: &mut C,
        time: &TimeOfDay,
    ) -> Result<usize, C::Error> {
        let mut redrawn = 0;
        for (i, text) in time.fields().into_iter().enumerate() {
            if self.shown[i] == text {
                continue;
            }
            let x = self.layout.field_x[i];
            canvas.draw_text(&self.shown[i], x, self.layout.y, self.bg, self.bg)?;
            canvas.draw_text(&text, x, self.layout.y, self.fg, self.bg)?;
            self.shown[i] = text;
            redrawn += 1;
        }
        Ok(redrawn)
    }
}

fn blank_fields() -> [FieldText; 3] {
    let mut blank = FieldText::new();
    let _ = blank.push_str("  ");
    [blank.clone(), blank.clone(), blank]
}

// ============================================================================
// Sync Schedule
// ============================================================================

/// Decides when the next network time sync is due.
///
/// The next sync is due once `interval` has passed since the most recent
/// attempt, successful or not, so a network outage costs one attempt per
/// interval. The very first check is always due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncSchedule {
    interval_secs: i64,
    last_sync: Option<i64>,
    last_attempt: Option<i64>,
}

impl SyncSchedule {
    /// Creates a schedule with no attempts recorded.
    pub fn new(interval_secs: i64) -> Self {
        Self {
            interval_secs,
            last_sync: None,
            last_attempt: None,
        }
    }

    /// Returns true if a sync should be attempted at `now`.
    pub fn is_due(&self, now: i64) -> bool {
        match self.last_attempt {
            Some(attempted) => now - attempted > self.interval_secs,
            None => true,
        }
    }

    /// Records an attempt that finished at `now`.
    pub fn record(&mut self, now: i64, success: bool) {
        self.last_attempt = Some(now);
        if success {
            self.last_sync = Some(now);
        }
    }

    /// Time of the last successful sync.
    pub fn last_sync(&self) -> Option<i64> {
        self.last_sync
    }

    /// Returns true once any sync has succeeded.
    pub fn is_synced(&self) -> bool {
        self.last_sync.is_some()
    }
}

// ============================================================================
// Time Synchronizer
// ============================================================================

/// Result of one [`TimeSynchronizer::sync`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The wall clock now reads a plausible time.
    Synced {
        /// Wall-clock time observed at completion.
        unix_time: i64,
    },
    /// Wi-Fi could not be brought up.
    WifiUnavailable,
    /// The SNTP client could not be started.
    SntpUnavailable,
    /// No time arrived within the polling budget.
    TimedOut,
    /// Network sync is turned off, so no attempt was made.
    Disabled,
}

impl SyncOutcome {
    /// Returns true for [`SyncOutcome::Synced`].
    pub fn is_success(&self) -> bool {
        matches!(self, SyncOutcome::Synced { .. })
    }
}

/// Runs one connect → SNTP → poll → disconnect session per call.
pub struct TimeSynchronizer<W, S, K, D> {
    wifi: W,
    sntp: S,
    clock: K,
    delay: D,
    max_attempts: u32,
    attempt_interval_ms: u32,
}

impl<W, S, K, D> TimeSynchronizer<W, S, K, D>
where
    W: WifiLink,
    S: TimeSync,
    K: WallClock,
    D: DelayNs,
{
    /// Creates a synchronizer using the polling budget from `config`.
    pub fn new(wifi: W, sntp: S, clock: K, delay: D, config: &SntpConfig) -> Self {
        Self {
            wifi,
            sntp,
            clock,
            delay,
            max_attempts: config.max_attempts,
            attempt_interval_ms: config.attempt_interval_ms,
        }
    }

    /// Returns the wall clock being synchronized.
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Returns the Wi-Fi link.
    pub fn wifi(&self) -> &W {
        &self.wifi
    }

    /// Returns the SNTP client.
    pub fn sntp(&self) -> &S {
        &self.sntp
    }

    /// Returns the Wi-Fi link mutably.
    pub fn wifi_mut(&mut self) -> &mut W {
        &mut self.wifi
    }

    /// Brings the network up, waits for SNTP to set the clock, and tears
    /// the network down again, whatever the outcome.
    pub fn sync(&mut self) -> SyncOutcome {
        log::info!("sync: connecting to WiFi");
        let outcome = match self.wifi.connect() {
            Ok(()) => self.poll_sntp(),
            Err(e) => {
                log::warn!("sync: WiFi connect failed: {:?}", e);
                SyncOutcome::WifiUnavailable
            }
        };

        if let Err(e) = self.wifi.disconnect() {
            log::warn!("sync: WiFi disconnect failed: {:?}", e);
        }

        match outcome {
            SyncOutcome::Synced { unix_time } => log::info!("sync: clock set to {}", unix_time),
            other => log::warn!("sync: failed ({:?})", other),
        }
        outcome
    }

    fn poll_sntp(&mut self) -> SyncOutcome {
        if let Err(e) = self.sntp.start() {
            log::warn!("sync: SNTP start failed: {:?}", e);
            return SyncOutcome::SntpUnavailable;
        }

        let mut attempt = 0;
        let outcome = loop {
            let now = self.clock.unix_time();
            if now >= MIN_VALID_UNIX_TIME {
                break SyncOutcome::Synced { unix_time: now };
            }
            if attempt >= self.max_attempts {
                break SyncOutcome::TimedOut;
            }
            attempt += 1;
            log::info!("sync: waiting for time ({}/{})", attempt, self.max_attempts);
            self.delay.delay_ms(self.attempt_interval_ms);
        };

        self.sntp.stop();
        outcome
    }
}

// ============================================================================
// Clock Application
// ============================================================================

/// The whole clock: face, canvas, and sync policy.
///
/// Call [`start`](Self::start) once, then [`tick`](Self::tick) from the
/// main loop at the refresh rate.
pub struct ClockApp<C, W, S, K, D> {
    canvas: C,
    sync: TimeSynchronizer<W, S, K, D>,
    schedule: SyncSchedule,
    face: ClockFace,
    utc_offset_secs: i32,
    sync_enabled: bool,
}

impl<C, W, S, K, D> ClockApp<C, W, S, K, D>
where
    C: Canvas,
    W: WifiLink,
    S: TimeSync,
    K: WallClock,
    D: DelayNs,
{
    /// Creates the application around an initialized canvas.
    pub fn new(canvas: C, sync: TimeSynchronizer<W, S, K, D>, config: &Config) -> Self {
        let face = ClockFace::new(
            ClockLayout::centered(C::WIDTH, C::HEIGHT),
            config.display.foreground,
            config.display.background,
        );
        Self {
            canvas,
            sync,
            schedule: SyncSchedule::new(config.sntp.sync_interval_secs()),
            face,
            utc_offset_secs: config.sntp.utc_offset_secs,
            sync_enabled: config.wifi.enabled,
        }
    }

    /// Draws the static layout and performs the boot-time sync.
    ///
    /// With [`WifiConfig::enabled`](crate::WifiConfig::enabled) off, the
    /// network is never touched and the clock runs from whatever the wall
    /// clock reads.
    pub fn start(&mut self) -> Result<SyncOutcome, C::Error> {
        self.face.draw_static(&mut self.canvas)?;
        if !self.sync_enabled {
            log::warn!("clock: network sync disabled");
            return Ok(SyncOutcome::Disabled);
        }
        Ok(self.sync_now())
    }

    /// Re-syncs if due, then redraws changed fields.
    ///
    /// Returns the number of fields redrawn.
    pub fn tick(&mut self) -> Result<usize, C::Error> {
        if self.sync_enabled && self.schedule.is_due(self.sync.clock().unix_time()) {
            log::info!("clock: time for re-sync");
            self.sync_now();
        }
        let now = TimeOfDay::from_unix(self.sync.clock().unix_time(), self.utc_offset_secs);
        self.face.update(&mut self.canvas, &now)
    }

    /// Returns the canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Returns the canvas mutably.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Returns the sync schedule.
    pub fn schedule(&self) -> &SyncSchedule {
        &self.schedule
    }

    /// Returns the synchronizer.
    pub fn synchronizer(&self) -> &TimeSynchronizer<W, S, K, D> {
        &self.sync
    }

    /// Returns the synchronizer mutably.
    pub fn synchronizer_mut(&mut self) -> &mut TimeSynchronizer<W, S, K, D> {
        &mut self.sync
    }

    /// Returns the clock face.
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    fn sync_now(&mut self) -> SyncOutcome {
        let outcome = self.sync.sync();
        self.schedule
            .record(self.sync.clock().unix_time(), outcome.is_success());
        outcome
    }
}
