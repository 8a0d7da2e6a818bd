//! Rendering primitives.
//!
//! Each primitive follows the same three steps:
//!
//! 1. validate (or clamp) against [`WIDTH`]x[`HEIGHT`], returning early on a no-op
//! 2. [`set_window`](Lcd::set_window) exactly once
//! 3. stream exactly the window's area in pixels
//!
//! Pixel streams are built in stack buffers of at most one scanline, so no
//! primitive allocates.

use super::{Color, Glyph, Lcd, GLYPH_SIZE, HEIGHT, WIDTH};
use crate::traits::{Canvas, LcdBus};
use embedded_hal::delay::DelayNs;

/// Horizontal distance between consecutive characters (8 glyph columns + 1 gap).
pub const GLYPH_ADVANCE: i32 = GLYPH_SIZE as i32 + 1;

/// Extra pixels added to the requested square size.
pub const SQUARE_PADDING: i32 = 4;

/// Side of the marker drawn by [`Lcd::draw_small_block`].
pub const SMALL_BLOCK_SIZE: i32 = 2;

const LINE_PIXELS: usize = WIDTH as usize;
const GLYPH_BYTES: usize = GLYPH_SIZE * GLYPH_SIZE * 2;

/// Returns true if the whole `w`x`h` rectangle at (`x`, `y`) is on screen.
fn fits(x: i32, y: i32, w: i32, h: i32) -> bool {
    w > 0 && h > 0 && x >= 0 && y >= 0 && x <= WIDTH - w && y <= HEIGHT - h
}

impl<B: LcdBus, D: DelayNs> Lcd<B, D> {
    /// Fills the whole screen, one scanline per transfer.
    pub fn clear(&mut self, color: Color) -> Result<(), B::Error> {
        self.fill_rect(0, 0, WIDTH, HEIGHT, color)
    }

    /// Sets a single pixel.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), B::Error> {
        self.fill_rect(x, y, 1, 1, color)
    }

    /// Fills a `w`x`h` rectangle with its top-left corner at (`x`, `y`).
    ///
    /// The rectangle must lie entirely on screen; partially visible or
    /// empty rectangles are not drawn.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    ) -> Result<(), B::Error> {
        if !fits(x, y, w, h) {
            return Ok(());
        }
        self.set_window(x as u16, y as u16, (x + w - 1) as u16, (y + h - 1) as u16)?;
        self.stream_solid(w as usize * h as usize, color)
    }

    /// Draws a 2x2 marker. Not drawn unless all four pixels are on screen.
    pub fn draw_small_block(&mut self, x: i32, y: i32, color: Color) -> Result<(), B::Error> {
        self.fill_rect(x, y, SMALL_BLOCK_SIZE, SMALL_BLOCK_SIZE, color)
    }

    /// Draws one character cell with its top-left corner at (`x`, `y`).
    ///
    /// The full 8x8 cell must fit: a glyph touching the edge is skipped
    /// entirely rather than clipped. Unsupported characters render as a
    /// background-filled cell.
    pub fn draw_glyph(
        &mut self,
        ch: char,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
    ) -> Result<(), B::Error> {
        let size = GLYPH_SIZE as i32;
        if !fits(x, y, size, size) {
            return Ok(());
        }

        let glyph = Glyph::for_char(ch);
        let mut buf = [0u8; GLYPH_BYTES];
        for (i, px) in buf.chunks_exact_mut(2).enumerate() {
            let (row, col) = (i / GLYPH_SIZE, i % GLYPH_SIZE);
            let color = if glyph.is_set(col, row) { fg } else { bg };
            px.copy_from_slice(&color.to_be_bytes());
        }

        self.set_window(x as u16, y as u16, (x + size - 1) as u16, (y + size - 1) as u16)?;
        self.bus.write_data(&buf)
    }

    /// Draws `text` left to right, advancing [`GLYPH_ADVANCE`] pixels per character.
    ///
    /// Stops at the first character whose cell would start past the right
    /// edge. There is no wrapping; characters whose cell does not fully fit
    /// are skipped but still advance the pen.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
    ) -> Result<(), B::Error> {
        let mut pen = x;
        for ch in text.chars() {
            if pen >= WIDTH {
                break;
            }
            self.draw_glyph(ch, pen, y, fg, bg)?;
            pen += GLYPH_ADVANCE;
        }
        Ok(())
    }

    /// Draws a horizontal run on row `y` from `x_start` to `x_end` inclusive.
    ///
    /// The run is clamped to the screen. Reversed or fully off-screen runs
    /// are not drawn.
    pub fn draw_hline(
        &mut self,
        x_start: i32,
        x_end: i32,
        y: i32,
        color: Color,
    ) -> Result<(), B::Error> {
        if !(0..HEIGHT).contains(&y) {
            return Ok(());
        }
        let start = x_start.max(0);
        let end = x_end.min(WIDTH - 1);
        if start > end {
            return Ok(());
        }
        self.set_window(start as u16, y as u16, end as u16, y as u16)?;
        self.stream_solid((end - start + 1) as usize, color)
    }

    /// Draws a vertical run in column `x` from `y_start` to `y_end` inclusive.
    ///
    /// Clamping rules match [`draw_hline`](Self::draw_hline).
    pub fn draw_vline(
        &mut self,
        y_start: i32,
        y_end: i32,
        x: i32,
        color: Color,
    ) -> Result<(), B::Error> {
        if !(0..WIDTH).contains(&x) {
            return Ok(());
        }
        let start = y_start.max(0);
        let end = y_end.min(HEIGHT - 1);
        if start > end {
            return Ok(());
        }
        self.set_window(x as u16, start as u16, x as u16, end as u16)?;
        self.stream_solid((end - start + 1) as usize, color)
    }

    /// Draws a square outline centred on (`center_x`, `center_y`).
    ///
    /// The side is `size + 4` (half-side truncated). Top and bottom edges
    /// stop one pixel short of the right edge, and the left/right edges
    /// exclude the top and bottom rows, so the two right-hand corner pixels
    /// stay unpainted. Each edge is clamped like a line.
    pub fn draw_square_outline(
        &mut self,
        center_x: i32,
        center_y: i32,
        size: i32,
        color: Color,
    ) -> Result<(), B::Error> {
        let half = size.saturating_add(SQUARE_PADDING) / 2;
        let top = center_y.saturating_sub(half);
        let bottom = center_y.saturating_add(half);
        let left = center_x.saturating_sub(half);
        let right = center_x.saturating_add(half);

        self.draw_hline(left, right.saturating_sub(1), top, color)?;
        self.draw_hline(left, right.saturating_sub(1), bottom, color)?;
        self.draw_vline(top.saturating_add(1), bottom.saturating_sub(1), left, color)?;
        self.draw_vline(top.saturating_add(1), bottom.saturating_sub(1), right, color)
    }

    /// Streams `count` copies of `color`, at most one scanline per transfer.
    fn stream_solid(&mut self, count: usize, color: Color) -> Result<(), B::Error> {
        let mut line = [0u8; LINE_PIXELS * 2];
        let chunk = count.min(LINE_PIXELS);
        for px in line[..chunk * 2].chunks_exact_mut(2) {
            px.copy_from_slice(&color.to_be_bytes());
        }

        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(LINE_PIXELS);
            self.bus.write_data(&line[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }
}

impl<B: LcdBus, D: DelayNs> Canvas for Lcd<B, D> {
    type Error = B::Error;
    const WIDTH: i32 = WIDTH;
    const HEIGHT: i32 = HEIGHT;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        Lcd::clear(self, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error> {
        Lcd::draw_text(self, text, x, y, fg, bg)
    }
}
