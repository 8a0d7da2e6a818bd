//! RGB565 color packing.

/// A 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue).
///
/// Every 16-bit value is a legal color. On the wire it is sent high byte
/// first, see [`to_be_bytes`](Self::to_be_bytes).
///
/// # Example
///
/// ```rust
/// use spi_lcd_clock::Color;
///
/// let orange = Color::from_rgb(255, 128, 0);
/// assert_eq!(orange.raw(), 0xFC00);
/// assert_eq!(Color::WHITE.to_be_bytes(), [0xFF, 0xFF]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(pub u16);

impl Color {
    /// All channels off.
    pub const BLACK: Color = Color(0x0000);
    /// All channels at full intensity.
    pub const WHITE: Color = Color(0xFFFF);
    /// Pure red.
    pub const RED: Color = Color(0xF800);
    /// Pure green.
    pub const GREEN: Color = Color(0x07E0);
    /// Pure blue.
    pub const BLUE: Color = Color(0x001F);
    /// Red + green.
    pub const YELLOW: Color = Color(0xFFE0);
    /// Green + blue.
    pub const CYAN: Color = Color(0x07FF);
    /// Red + blue.
    pub const MAGENTA: Color = Color(0xF81F);

    /// Wraps a raw RGB565 value.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Packs 8-bit channels into RGB565, dropping the low bits.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Returns the raw 16-bit value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns the two bytes in transmission order.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics::pixelcolor::Rgb565) -> Self {
        use embedded_graphics::prelude::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        use embedded_graphics::pixelcolor::raw::RawU16;
        RawU16::new(color.0).into()
    }
}
