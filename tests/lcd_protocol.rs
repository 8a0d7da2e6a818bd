//! Controller protocol tests: power-on sequencing and addressing windows

use spi_lcd_clock::{
    hal::{BusOp, MockBus, MockBusError, MockDelay},
    Lcd,
};

// ============================================================================
// Power-On Sequence
// ============================================================================

#[test]
fn power_on_sequence_order() {
    let lcd = Lcd::init(MockBus::new(), MockDelay::new()).unwrap();
    let (bus, delay) = lcd.release();

    assert_eq!(
        bus.ops,
        vec![
            BusOp::ResetLow,
            BusOp::ResetHigh,
            BusOp::Command(0x11),
            BusOp::Command(0x3A),
            BusOp::Data(vec![0x05]),
            BusOp::Command(0x36),
            BusOp::Data(vec![0x60]),
            BusOp::Command(0x29),
        ]
    );
    // Reset low hold, reset high hold, sleep-out settle
    assert_eq!(delay.ms_calls, vec![50, 50, 120]);
}

#[test]
fn power_on_with_custom_memory_access() {
    let mut lcd = Lcd::new(MockBus::new(), MockDelay::new()).with_memory_access(0xA0);
    lcd.power_on_sequence().unwrap();

    let ops = &lcd.bus().ops;
    let madctl = ops
        .iter()
        .position(|op| *op == BusOp::Command(0x36))
        .unwrap();
    assert_eq!(ops[madctl + 1], BusOp::Data(vec![0xA0]));
}

#[test]
fn power_on_failure_propagates() {
    let mut bus = MockBus::new();
    // Reset succeeds, SLPOUT fails
    bus.fail_after(2);

    let result = Lcd::init(bus, MockDelay::new());
    assert_eq!(result.err(), Some(MockBusError));
}

#[test]
fn power_on_can_be_repeated() {
    let mut lcd = Lcd::init(MockBus::new(), MockDelay::new()).unwrap();
    let first = lcd.bus().ops.clone();

    lcd.bus_mut().clear_ops();
    lcd.power_on_sequence().unwrap();
    assert_eq!(lcd.bus().ops, first);
}

// ============================================================================
// Addressing Window
// ============================================================================

#[test]
fn set_window_shape_is_independent_of_size() {
    let rects = [
        (0, 0, 0, 0),
        (0, 0, 159, 127),
        (10, 20, 17, 27),
        (159, 127, 159, 127),
    ];

    for (x0, y0, x1, y1) in rects {
        let mut lcd = Lcd::new(MockBus::new(), MockDelay::new());
        lcd.set_window(x0, y0, x1, y1).unwrap();

        let ops = &lcd.bus().ops;
        assert_eq!(ops.len(), 5, "rect {:?}", (x0, y0, x1, y1));
        assert_eq!(lcd.bus().commands(), vec![0x2A, 0x2B, 0x2C]);

        let data_bytes: usize = ops
            .iter()
            .map(|op| match op {
                BusOp::Data(d) => d.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(data_bytes, 8);
    }
}

#[test]
fn set_window_encodes_big_endian_bounds() {
    let mut lcd = Lcd::new(MockBus::new(), MockDelay::new());
    lcd.set_window(1, 2, 300, 0x1234).unwrap();

    assert_eq!(
        lcd.bus().ops,
        vec![
            BusOp::Command(0x2A),
            BusOp::Data(vec![0x00, 0x01, 0x01, 0x2C]),
            BusOp::Command(0x2B),
            BusOp::Data(vec![0x00, 0x02, 0x12, 0x34]),
            BusOp::Command(0x2C),
        ]
    );
}

#[test]
fn set_window_is_reissued_per_primitive() {
    let mut lcd = Lcd::new(MockBus::new(), MockDelay::new());
    lcd.draw_pixel(5, 5, spi_lcd_clock::Color::RED).unwrap();
    lcd.draw_pixel(6, 5, spi_lcd_clock::Color::RED).unwrap();

    assert_eq!(lcd.bus().windows(), vec![(5, 5, 5, 5), (6, 5, 6, 5)]);
}
