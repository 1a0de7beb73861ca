//! ARGB color value type
//!
//! Colors are four 8-bit channels in ARGB order. The type is a plain value:
//! `Copy`, exact channel-wise equality, and hashable so it can key the
//! nearest-color cache.

use image::Rgba;

/// A color with four 8-bit channels: alpha, red, green, blue.
///
/// Equality is exact, channel-wise. Two colors that differ in any channel
/// (including alpha) are distinct; there is no tolerance or perceptual
/// comparison at this level.
///
/// # Example
///
/// ```
/// use tilequant::Color;
///
/// let red = Color::opaque(255, 0, 0);
/// assert_eq!(red.a, 255);
/// assert!(red.is_opaque());
/// assert_ne!(red, Color::TRANSPARENT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// The transparency sentinel: all four channels zero.
    ///
    /// This is the color the resolver returns for pixels below the alpha
    /// threshold, and the color reconstruction substitutes for unknown
    /// index bytes. It is distinct from every opaque palette entry.
    pub const TRANSPARENT: Color = Color {
        a: 0,
        r: 0,
        g: 0,
        b: 0,
    };

    /// Create a color from explicit ARGB channel values.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a fully opaque color (alpha = 255).
    ///
    /// # Example
    ///
    /// ```
    /// use tilequant::Color;
    ///
    /// let white = Color::opaque(255, 255, 255);
    /// assert_eq!(white, Color::new(255, 255, 255, 255));
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// True if the alpha channel is exactly 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Rgba<u8>> for Color {
    /// Convert from the raster pixel type (RGBA channel order).
    #[inline]
    fn from(px: Rgba<u8>) -> Self {
        Self {
            a: px[3],
            r: px[0],
            g: px[1],
            b: px[2],
        }
    }
}

impl From<Color> for Rgba<u8> {
    /// Convert to the raster pixel type (RGBA channel order).
    #[inline]
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}
