//! Clock application tests: changed-field redraw and sync scheduling

use spi_lcd_clock::{
    clock::{ClockFace, ClockLayout, SyncOutcome, TimeOfDay, TimeSynchronizer},
    hal::{MockBus, MockDelay, MockTimeSync, MockWallClock, MockWifi},
    traits::{Canvas, WallClock},
    ClockApp, Color, Config, Lcd, SntpConfig, WifiConfig,
};

/// 2023-11-14T22:13:20Z, shown as 00:13:20 at the default UTC+2.
const NETWORK_TIME: i64 = 1_700_000_000;

type App = ClockApp<Lcd<MockBus, MockDelay>, MockWifi, MockTimeSync, MockWallClock, MockDelay>;

fn app_with(wifi: MockWifi, sntp: MockTimeSync, clock: &MockWallClock) -> App {
    let config = Config::default();
    let sync = TimeSynchronizer::new(wifi, sntp, clock.clone(), MockDelay::new(), &config.sntp);
    ClockApp::new(Lcd::new(MockBus::new(), MockDelay::new()), sync, &config)
}

fn synced_app(clock: &MockWallClock) -> App {
    app_with(MockWifi::new(), MockTimeSync::setting(clock, 0, NETWORK_TIME), clock)
}

fn shown(app: &App) -> Vec<&str> {
    app.face().shown().iter().map(|s| s.as_str()).collect()
}

/// Canvas that records text draws instead of pixels.
#[derive(Default)]
struct Recorder {
    clears: Vec<Color>,
    texts: Vec<(String, i32, i32, Color, Color)>,
}

impl Canvas for Recorder {
    type Error = ();
    const WIDTH: i32 = 160;
    const HEIGHT: i32 = 128;

    fn clear(&mut self, color: Color) -> Result<(), ()> {
        self.clears.push(color);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, fg: Color, bg: Color) -> Result<(), ()> {
        self.texts.push((text.to_string(), x, y, fg, bg));
        Ok(())
    }
}

// ============================================================================
// Clock Face
// ============================================================================

#[test]
fn static_layout_clears_and_draws_colons() {
    let mut face = ClockFace::new(ClockLayout::centered(160, 128), Color::WHITE, Color::BLACK);
    let mut canvas = Recorder::default();

    face.draw_static(&mut canvas).unwrap();

    assert_eq!(canvas.clears, vec![Color::BLACK]);
    assert_eq!(
        canvas.texts,
        vec![
            (":".to_string(), 75, 64, Color::WHITE, Color::BLACK),
            (":".to_string(), 102, 64, Color::WHITE, Color::BLACK),
        ]
    );
}

#[test]
fn first_update_draws_all_fields_over_blank() {
    let mut face = ClockFace::new(ClockLayout::centered(160, 128), Color::WHITE, Color::BLACK);
    let mut canvas = Recorder::default();
    let time = TimeOfDay {
        hour: 9,
        minute: 5,
        second: 0,
    };

    assert_eq!(face.update(&mut canvas, &time).unwrap(), 3);

    let draws: Vec<(&str, i32, Color)> = canvas
        .texts
        .iter()
        .map(|(t, x, _, fg, _)| (t.as_str(), *x, *fg))
        .collect();
    assert_eq!(
        draws,
        vec![
            ("  ", 50, Color::BLACK),
            ("09", 50, Color::WHITE),
            ("  ", 85, Color::BLACK),
            ("05", 85, Color::WHITE),
            ("  ", 120, Color::BLACK),
            ("00", 120, Color::WHITE),
        ]
    );
}

#[test]
fn unchanged_time_draws_nothing() {
    let mut face = ClockFace::new(ClockLayout::centered(160, 128), Color::WHITE, Color::BLACK);
    let mut canvas = Recorder::default();
    let time = TimeOfDay::from_unix(NETWORK_TIME, 0);

    face.update(&mut canvas, &time).unwrap();
    canvas.texts.clear();

    assert_eq!(face.update(&mut canvas, &time).unwrap(), 0);
    assert!(canvas.texts.is_empty());
}

#[test]
fn changed_field_is_erased_then_redrawn() {
    let mut face = ClockFace::new(ClockLayout::centered(160, 128), Color::GREEN, Color::BLUE);
    let mut canvas = Recorder::default();

    face.update(&mut canvas, &TimeOfDay::from_unix(59, 0)).unwrap();
    canvas.texts.clear();

    // 00:00:59 -> 00:01:00
    assert_eq!(face.update(&mut canvas, &TimeOfDay::from_unix(60, 0)).unwrap(), 2);
    assert_eq!(
        canvas.texts,
        vec![
            ("00".to_string(), 85, 64, Color::BLUE, Color::BLUE),
            ("01".to_string(), 85, 64, Color::GREEN, Color::BLUE),
            ("59".to_string(), 120, 64, Color::BLUE, Color::BLUE),
            ("00".to_string(), 120, 64, Color::GREEN, Color::BLUE),
        ]
    );
}

// ============================================================================
// Time Synchronizer
// ============================================================================

#[test]
fn sync_succeeds_after_polling() {
    let clock = MockWallClock::new(0);
    let mut delay = MockDelay::new();
    let sntp = MockTimeSync::setting(&clock, 3, NETWORK_TIME);
    let mut sync = TimeSynchronizer::new(
        MockWifi::new(),
        sntp,
        clock.clone(),
        &mut delay,
        &SntpConfig::default(),
    );

    let outcome = sync.sync();

    assert_eq!(
        outcome,
        SyncOutcome::Synced {
            unix_time: NETWORK_TIME
        }
    );
    assert_eq!(sync.sntp().stop_calls, 1);
    assert!(!sync.sntp().running);
    assert_eq!(sync.wifi().disconnect_calls, 1);
    assert!(!sync.wifi().connected);
    drop(sync);
    assert_eq!(delay.ms_calls, vec![2000, 2000, 2000]);
}

#[test]
fn sync_times_out_after_budget() {
    let clock = MockWallClock::new(0);
    let mut delay = MockDelay::new();
    let mut sync = TimeSynchronizer::new(
        MockWifi::new(),
        MockTimeSync::new(),
        clock.clone(),
        &mut delay,
        &SntpConfig::default(),
    );

    assert_eq!(sync.sync(), SyncOutcome::TimedOut);
    assert_eq!(sync.sntp().stop_calls, 1);
    assert_eq!(sync.wifi().disconnect_calls, 1);
    drop(sync);
    assert_eq!(delay.ms_calls, vec![2000; 10]);
}

#[test]
fn sync_without_wifi_skips_sntp() {
    let clock = MockWallClock::new(0);
    let mut sync = TimeSynchronizer::new(
        MockWifi::failing(),
        MockTimeSync::setting(&clock, 0, NETWORK_TIME),
        clock.clone(),
        MockDelay::new(),
        &SntpConfig::default(),
    );

    assert_eq!(sync.sync(), SyncOutcome::WifiUnavailable);
    assert_eq!(sync.sntp().start_calls, 0);
    assert_eq!(sync.wifi().disconnect_calls, 1);
    assert_eq!(clock.unix_time(), 0);
}

#[test]
fn sync_with_failing_sntp_still_disconnects() {
    let clock = MockWallClock::new(0);
    let mut sntp = MockTimeSync::new();
    sntp.fail_start = true;
    let mut sync = TimeSynchronizer::new(
        MockWifi::new(),
        sntp,
        clock,
        MockDelay::new(),
        &SntpConfig::default(),
    );

    assert_eq!(sync.sync(), SyncOutcome::SntpUnavailable);
    assert_eq!(sync.sntp().stop_calls, 0);
    assert_eq!(sync.wifi().disconnect_calls, 1);
    assert!(!sync.wifi().connected);
}

#[test]
fn sync_with_already_valid_clock_does_not_wait() {
    let clock = MockWallClock::new(NETWORK_TIME);
    let mut delay = MockDelay::new();
    let mut sync = TimeSynchronizer::new(
        MockWifi::new(),
        MockTimeSync::new(),
        clock,
        &mut delay,
        &SntpConfig::default().with_attempts(3, 100),
    );

    assert!(sync.sync().is_success());
    drop(sync);
    assert!(delay.ms_calls.is_empty());
}

// ============================================================================
// Clock Application
// ============================================================================

#[test]
fn start_draws_layout_and_syncs() {
    let clock = MockWallClock::new(0);
    let mut app = synced_app(&clock);

    let outcome = app.start().unwrap();

    assert!(outcome.is_success());
    assert!(app.schedule().is_synced());
    assert_eq!(app.schedule().last_sync(), Some(NETWORK_TIME));
    // Full-screen clear then two colons
    let windows = app.canvas().bus().windows();
    assert_eq!(windows[0], (0, 0, 159, 127));
    assert_eq!(windows[1..], [(75, 64, 82, 71), (102, 64, 109, 71)]);
}

#[test]
fn tick_shows_local_time() {
    let clock = MockWallClock::new(0);
    let mut app = synced_app(&clock);
    app.start().unwrap();

    assert_eq!(app.tick().unwrap(), 3);
    assert_eq!(shown(&app), vec!["00", "13", "20"]);
}

#[test]
fn tick_without_change_issues_no_transactions() {
    let clock = MockWallClock::new(0);
    let mut app = synced_app(&clock);
    app.start().unwrap();
    app.tick().unwrap();

    app.canvas_mut().bus_mut().clear_ops();
    assert_eq!(app.tick().unwrap(), 0);
    assert!(app.canvas().bus().ops.is_empty());
}

#[test]
fn tick_redraws_only_seconds() {
    let clock = MockWallClock::new(0);
    let mut app = synced_app(&clock);
    app.start().unwrap();
    app.tick().unwrap();

    app.canvas_mut().bus_mut().clear_ops();
    clock.advance(1);
    assert_eq!(app.tick().unwrap(), 1);
    assert_eq!(shown(&app), vec!["00", "13", "21"]);

    let bus = app.canvas().bus();
    let x0s: Vec<u16> = bus.windows().iter().map(|w| w.0).collect();
    assert_eq!(x0s, vec![120, 129, 120, 129]);

    // The erase pass is solid background
    let writes = bus.data_writes_after_window();
    assert!(writes[0].iter().chain(writes[1]).all(|b| *b == 0));
}

#[test]
fn resync_after_interval() {
    let clock = MockWallClock::new(0);
    let mut app = synced_app(&clock);
    app.start().unwrap();
    app.tick().unwrap();

    clock.advance(30 * 60);
    app.tick().unwrap();
    assert_eq!(app.synchronizer().wifi().connect_calls, 1);

    clock.advance(1);
    app.tick().unwrap();
    assert_eq!(app.synchronizer().wifi().connect_calls, 2);
    assert_eq!(app.synchronizer().sntp().start_calls, 2);
    // The mock server answers with the same time again
    assert_eq!(app.schedule().last_sync(), Some(NETWORK_TIME));
}

#[test]
fn failed_boot_sync_is_retried() {
    let clock = MockWallClock::new(0);
    let mut app = app_with(MockWifi::failing(), MockTimeSync::new(), &clock);

    assert_eq!(app.start().unwrap(), SyncOutcome::WifiUnavailable);
    assert!(!app.schedule().is_synced());

    // Unsynced clock still ticks from the epoch at UTC+2
    app.tick().unwrap();
    assert_eq!(shown(&app), vec!["02", "00", "00"]);
    assert_eq!(app.synchronizer().wifi().connect_calls, 1);

    clock.advance(30 * 60 + 1);
    app.tick().unwrap();
    assert_eq!(app.synchronizer().wifi().connect_calls, 2);
}

#[test]
fn failed_resync_waits_a_full_interval() {
    let clock = MockWallClock::new(0);
    let mut app = synced_app(&clock);
    app.start().unwrap();
    app.tick().unwrap();

    // Network goes away after the boot sync
    app.synchronizer_mut().wifi_mut().fail_connect = true;

    clock.advance(31 * 60);
    app.tick().unwrap();
    assert_eq!(app.synchronizer().wifi().connect_calls, 2);

    for _ in 0..5 {
        clock.advance(1);
        app.tick().unwrap();
    }
    assert_eq!(app.synchronizer().wifi().connect_calls, 2);
    assert_eq!(app.schedule().last_sync(), Some(NETWORK_TIME));

    // 5 s already passed since the failed attempt
    clock.advance(30 * 60 - 5);
    app.tick().unwrap();
    assert_eq!(app.synchronizer().wifi().connect_calls, 2);

    clock.advance(1);
    app.tick().unwrap();
    assert_eq!(app.synchronizer().wifi().connect_calls, 3);
}

#[test]
fn disabled_wifi_never_syncs() {
    let clock = MockWallClock::new(0);
    let config = Config::default().with_wifi(WifiConfig::default().with_enabled(false));
    let sntp = MockTimeSync::setting(&clock, 0, NETWORK_TIME);
    let sync = TimeSynchronizer::new(
        MockWifi::new(),
        sntp,
        clock.clone(),
        MockDelay::new(),
        &config.sntp,
    );
    let mut app = ClockApp::new(Lcd::new(MockBus::new(), MockDelay::new()), sync, &config);

    assert_eq!(app.start().unwrap(), SyncOutcome::Disabled);
    assert!(!app.schedule().is_synced());

    app.tick().unwrap();
    clock.advance(2 * 60 * 60);
    app.tick().unwrap();

    assert_eq!(app.synchronizer().wifi().connect_calls, 0);
    assert_eq!(app.synchronizer().sntp().start_calls, 0);
    assert_eq!(shown(&app), vec!["04", "00", "00"]);
}
