//! Palette capability trait and the provided indexed implementation.
//!
//! The engine never owns palette data; it consumes any type implementing
//! [`Palette`]. [`IndexedPalette`] is the concrete implementation used by
//! callers and tests, validating the index/color contract at construction.

use std::collections::HashMap;

use super::error::PaletteError;
use crate::color::Color;

/// An ordered, finite set of fully-opaque colors with one-byte indices.
///
/// The enumeration order of [`colors`](Palette::colors) is significant:
/// the nearest-color search scans it front to back and keeps the first
/// entry on distance ties. Index byte 0 is reserved to mean "fully
/// transparent" and must never be assigned to an entry.
///
/// Implementations may include non-opaque entries in `colors()`; the
/// resolver skips them. Only alpha = 255 entries are eligible match
/// targets.
pub trait Palette {
    /// All palette colors in their defined enumeration order.
    fn colors(&self) -> &[Color];

    /// The index byte assigned to `color`.
    ///
    /// Only invoked on colors previously returned by the nearest-color
    /// search, so every lookup should hit. Implementations return the
    /// reserved transparent index 0 for colors not in the palette.
    fn color_to_byte(&self, color: Color) -> u8;

    /// The color assigned to `byte`, or `None` if the byte maps to no
    /// palette entry. Byte 0 always returns `None` (reserved).
    fn byte_to_color(&self, byte: u8) -> Option<Color>;
}

/// A palette backed by an explicit `(index byte, color)` entry list.
///
/// Construction validates the full palette contract: no entry may use the
/// reserved index 0, index bytes and colors must be unique, and every
/// color must be fully opaque. Lookup maps in both directions are built
/// once so per-pixel queries stay constant-time.
///
/// # Example
///
/// ```
/// use tilequant::{Color, IndexedPalette, Palette};
///
/// let palette = IndexedPalette::new(&[
///     (1, Color::opaque(0, 0, 0)),
///     (2, Color::opaque(255, 255, 255)),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color_to_byte(Color::opaque(0, 0, 0)), 1);
/// assert_eq!(palette.byte_to_color(2), Some(Color::opaque(255, 255, 255)));
/// assert_eq!(palette.byte_to_color(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedPalette {
    colors: Vec<Color>,
    to_byte: HashMap<Color, u8>,
    to_color: HashMap<u8, Color>,
}

impl IndexedPalette {
    /// Create a palette from `(index byte, color)` entries.
    ///
    /// Enumeration order of the slice becomes the palette's search order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entries` is empty ([`PaletteError::EmptyPalette`])
    /// - any entry uses index byte 0 ([`PaletteError::ReservedIndex`])
    /// - an index byte appears twice ([`PaletteError::DuplicateIndex`])
    /// - a color appears twice ([`PaletteError::DuplicateColor`])
    /// - a color has alpha < 255 ([`PaletteError::NotOpaque`])
    pub fn new(entries: &[(u8, Color)]) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut colors = Vec::with_capacity(entries.len());
        let mut to_byte = HashMap::with_capacity(entries.len());
        let mut to_color = HashMap::with_capacity(entries.len());

        for (i, &(byte, color)) in entries.iter().enumerate() {
            if byte == 0 {
                return Err(PaletteError::ReservedIndex { index: i });
            }
            if !color.is_opaque() {
                return Err(PaletteError::NotOpaque {
                    index: i,
                    alpha: color.a,
                });
            }
            if to_color.contains_key(&byte) {
                return Err(PaletteError::DuplicateIndex { index: i, byte });
            }
            if to_byte.contains_key(&color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }

            colors.push(color);
            to_byte.insert(color, byte);
            to_color.insert(byte, color);
        }

        Ok(Self {
            colors,
            to_byte,
            to_color,
        })
    }

    /// Returns the number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no entries.
    ///
    /// Note: always `false` in practice since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Palette for IndexedPalette {
    #[inline]
    fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    fn color_to_byte(&self, color: Color) -> u8 {
        self.to_byte.get(&color).copied().unwrap_or(0)
    }

    #[inline]
    fn byte_to_color(&self, byte: u8) -> Option<Color> {
        self.to_color.get(&byte).copied()
    }
}
