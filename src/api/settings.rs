//! Conversion settings.

use serde::{Deserialize, Serialize};

use crate::preprocess::InterpolationMode;

/// Settings for one conversion run.
///
/// All fields are public for direct construction; fluent setters exist
/// for builder-style call sites. The serde derives let host applications
/// persist conversion profiles; omitted fields deserialize to the same
/// values as [`Default`].
///
/// # Example
///
/// ```
/// use tilequant::{ConversionSettings, InterpolationMode};
///
/// let settings = ConversionSettings::new()
///     .split(2, 2)
///     .dither(false)
///     .interpolation(InterpolationMode::NearestNeighbor);
///
/// assert_eq!(settings.split_w, 2);
/// assert!(!settings.dither);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Tile-grid columns; the canvas becomes `128 * split_w` pixels wide.
    /// Must be at least 1.
    #[serde(default = "default_split")]
    pub split_w: u32,

    /// Tile-grid rows; the canvas becomes `128 * split_h` pixels tall.
    /// Must be at least 1.
    #[serde(default = "default_split")]
    pub split_h: u32,

    /// Diffuse quantization error to forward neighbors during the pass.
    #[serde(default = "default_true")]
    pub dither: bool,

    /// Resampling policy for the resize onto the tile canvas.
    #[serde(default)]
    pub interpolation: InterpolationMode,

    /// Scale directly to the canvas dimensions instead of aspect-fit
    /// letterboxing onto a transparent background.
    #[serde(default = "default_true")]
    pub stretch: bool,
}

fn default_split() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            split_w: 1,
            split_h: 1,
            dither: true,
            interpolation: InterpolationMode::Auto,
            stretch: true,
        }
    }
}

impl ConversionSettings {
    /// Create settings with default values: a 1×1 grid, dithering on,
    /// automatic interpolation, stretch scaling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile-grid split counts.
    #[inline]
    pub fn split(mut self, split_w: u32, split_h: u32) -> Self {
        self.split_w = split_w;
        self.split_h = split_h;
        self
    }

    /// Enable or disable error diffusion.
    #[inline]
    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    /// Set the interpolation policy.
    #[inline]
    pub fn interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    /// Choose between stretch scaling and aspect-fit letterboxing.
    #[inline]
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }
}
