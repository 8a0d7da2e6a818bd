//! ST7735-class controller protocol: power-on and addressing window.

use super::Lcd;
use crate::traits::LcdBus;
use embedded_hal::delay::DelayNs;

/// Controller opcodes used by this driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Leave sleep mode (SLPOUT).
    SleepOut = 0x11,
    /// Enable panel output (DISPON).
    DisplayOn = 0x29,
    /// Column bounds of the addressing window (CASET).
    ColumnAddressSet = 0x2A,
    /// Row bounds of the addressing window (RASET).
    RowAddressSet = 0x2B,
    /// Start of a pixel stream into the window (RAMWR).
    MemoryWrite = 0x2C,
    /// Scan direction and color order (MADCTL).
    MemoryAccessControl = 0x36,
    /// Interface pixel format (COLMOD).
    PixelFormat = 0x3A,
}

impl Command {
    /// Returns the opcode byte.
    #[inline]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// Time the controller needs after SLPOUT before it accepts further commands.
pub const SLEEP_OUT_SETTLE_MS: u32 = 120;

/// COLMOD parameter selecting 16 bits per pixel.
pub const PIXEL_FORMAT_16BPP: u8 = 0x05;

/// MADCTL parameter: row/column exchange + column mirror (landscape).
pub const MADCTL_LANDSCAPE: u8 = 0x60;

impl<B: LcdBus, D: DelayNs> Lcd<B, D> {
    /// Resets and wakes the controller, then turns the panel on.
    ///
    /// Order matters: the controller must have left sleep and settled
    /// before it will latch the pixel format and scan settings.
    pub fn power_on_sequence(&mut self) -> Result<(), B::Error> {
        log::debug!("lcd: hardware reset");
        self.bus.reset(&mut self.delay)?;

        self.command(Command::SleepOut, &[])?;
        self.delay.delay_ms(SLEEP_OUT_SETTLE_MS);

        self.command(Command::PixelFormat, &[PIXEL_FORMAT_16BPP])?;
        let madctl = self.memory_access;
        self.command(Command::MemoryAccessControl, &[madctl])?;
        self.command(Command::DisplayOn, &[])?;

        log::info!("lcd: display on (madctl={:#04x})", madctl);
        Ok(())
    }

    /// Sets the inclusive addressing window and opens a pixel stream.
    ///
    /// The caller must follow up with exactly `(x1-x0+1)*(y1-y0+1)`
    /// pixels. Bounds are not checked here.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), B::Error> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        self.command(Command::ColumnAddressSet, &[x0h, x0l, x1h, x1l])?;

        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.command(Command::RowAddressSet, &[y0h, y0l, y1h, y1l])?;

        self.command(Command::MemoryWrite, &[])
    }

    fn command(&mut self, command: Command, params: &[u8]) -> Result<(), B::Error> {
        self.bus.write_command(command.opcode())?;
        if !params.is_empty() {
            self.bus.write_data(params)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{BusOp, MockBus, MockDelay};

    #[test]
    fn opcodes_match_datasheet() {
        assert_eq!(Command::SleepOut.opcode(), 0x11);
        assert_eq!(Command::DisplayOn.opcode(), 0x29);
        assert_eq!(Command::ColumnAddressSet.opcode(), 0x2A);
        assert_eq!(Command::RowAddressSet.opcode(), 0x2B);
        assert_eq!(Command::MemoryWrite.opcode(), 0x2C);
        assert_eq!(Command::MemoryAccessControl.opcode(), 0x36);
        assert_eq!(Command::PixelFormat.opcode(), 0x3A);
    }

    #[test]
    fn custom_memory_access_is_sent() {
        let mut lcd = Lcd::new(MockBus::new(), MockDelay::new()).with_memory_access(0xA8);
        lcd.power_on_sequence().unwrap();

        let ops = &lcd.bus().ops;
        let pos = ops
            .iter()
            .position(|op| *op == BusOp::Command(0x36))
            .unwrap();
        assert_eq!(ops[pos + 1], BusOp::Data(vec![0xA8]));
    }

    #[test]
    fn window_bounds_above_255_use_high_byte() {
        let mut lcd = Lcd::new(MockBus::new(), MockDelay::new());
        lcd.set_window(0x0102, 0, 0x0304, 0).unwrap();
        assert_eq!(lcd.bus().ops[1], BusOp::Data(vec![0x01, 0x02, 0x03, 0x04]));
    }

    #[test]
    fn set_window_does_not_delay() {
        let mut lcd = Lcd::new(MockBus::new(), MockDelay::new());
        lcd.set_window(0, 0, 159, 127).unwrap();
        let (_, delay) = lcd.release();
        assert_eq!(delay.total_ms(), 0);
    }
}
