//! Text canvas abstraction for the clock face.
//!
//! This module defines the [`Canvas`] trait: the small drawing surface the
//! clock application renders onto. [`Lcd`](crate::lcd::Lcd) implements it;
//! tests can substitute a recorder.

use crate::lcd::Color;

/// Drawing surface used by [`ClockFace`](crate::clock::ClockFace).
///
/// # Example
///
/// ```ignore
/// use spi_lcd_clock::traits::Canvas;
/// use spi_lcd_clock::Color;
///
/// struct Recorder { texts: Vec<String> }
///
/// impl Canvas for Recorder {
///     type Error = ();
///     const WIDTH: i32 = 160;
///     const HEIGHT: i32 = 128;
///
///     fn clear(&mut self, _color: Color) -> Result<(), ()> { Ok(()) }
///     fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _fg: Color, _bg: Color) -> Result<(), ()> {
///         self.texts.push(text.into());
///         Ok(())
///     }
/// }
/// ```
pub trait Canvas {
    /// Error type for drawing operations.
    type Error;

    /// Drawable width in pixels.
    const WIDTH: i32;

    /// Drawable height in pixels.
    const HEIGHT: i32;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draws `text` with its top-left corner at (`x`, `y`).
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Color,
        bg: Color,
    ) -> Result<(), Self::Error>;
}
