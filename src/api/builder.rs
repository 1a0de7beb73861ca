//! TileQuantizer builder -- the primary entry point for the crate.
//!
//! [`TileQuantizer`] binds a palette, a distance metric, and the
//! nearest-color cache scoped to that pairing, and runs conversions
//! through the compositor.

use image::RgbaImage;

use super::error::ConvertError;
use super::settings::ConversionSettings;
use crate::compose::{Progress, TileCompositor};
use crate::output::TileResult;
use crate::palette::{DistanceMetric, EuclideanRgb, Palette};
use crate::resolve::ColorCache;

/// High-level tile quantizer.
///
/// `TileQuantizer` is the recommended entry point for the crate. It owns
/// the palette, the distance metric, and the memoization cache for that
/// exact pairing, so cache entries can never leak across palettes or
/// metrics: building a quantizer starts a fresh cache, and swapping the
/// metric with [`with_metric`](Self::with_metric) discards it.
///
/// # Design
///
/// - Constructor requires a [`Palette`] implementation (no invalid states)
/// - [`convert()`](Self::convert) takes `&self`, so one quantizer is
///   reusable across images and keeps its warm cache between runs
/// - The resolver and compositor see the palette and metric only through
///   their capability traits
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use tilequant::{Color, ConversionSettings, IndexedPalette, TileQuantizer};
///
/// let palette = IndexedPalette::new(&[
///     (1, Color::opaque(0, 0, 0)),
///     (2, Color::opaque(255, 255, 255)),
/// ])
/// .unwrap();
///
/// let quantizer = TileQuantizer::new(palette);
/// let source = RgbaImage::from_pixel(128, 128, Rgba([0, 0, 0, 255]));
/// let tiles = quantizer
///     .convert(&source, &ConversionSettings::new())
///     .unwrap();
///
/// assert_eq!(tiles.len(), 1);
/// assert!(tiles[0].indices().iter().all(|&b| b == 1));
/// ```
pub struct TileQuantizer<P, M = EuclideanRgb> {
    palette: P,
    metric: M,
    cache: ColorCache,
}

impl<P: Palette> TileQuantizer<P> {
    /// Create a quantizer with the given palette and the default
    /// Euclidean RGB metric.
    pub fn new(palette: P) -> Self {
        Self {
            palette,
            metric: EuclideanRgb,
            cache: ColorCache::new(),
        }
    }
}

impl<P: Palette, M: DistanceMetric> TileQuantizer<P, M> {
    /// Replace the distance metric.
    ///
    /// The memoization cache is discarded: its entries were computed
    /// under the previous metric and would contaminate results under the
    /// new one.
    pub fn with_metric<M2: DistanceMetric>(self, metric: M2) -> TileQuantizer<P, M2> {
        TileQuantizer {
            palette: self.palette,
            metric,
            cache: ColorCache::new(),
        }
    }

    /// The palette this quantizer converts against.
    #[inline]
    pub fn palette(&self) -> &P {
        &self.palette
    }

    /// The nearest-color cache scoped to this palette and metric.
    ///
    /// Exposed so hosts can observe memoization (`len`) or reset it
    /// (`clear`) without rebuilding the quantizer.
    #[inline]
    pub fn cache(&self) -> &ColorCache {
        &self.cache
    }

    /// Convert a source image into tiles.
    ///
    /// Equivalent to [`convert_with_progress`](Self::convert_with_progress)
    /// with a no-op callback.
    pub fn convert(
        &self,
        source: &RgbaImage,
        settings: &ConversionSettings,
    ) -> Result<Vec<TileResult>, ConvertError> {
        self.convert_with_progress(source, settings, |_| {})
    }

    /// Convert a source image into tiles, reporting per-row progress.
    ///
    /// The callback receives monotonically non-decreasing fractions
    /// ending at exactly `1.0`; the conversion never blocks on it.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidSplit`] for a zero or oversized split
    /// - [`ConvertError::EmptySource`] for a zero-dimension source
    pub fn convert_with_progress(
        &self,
        source: &RgbaImage,
        settings: &ConversionSettings,
        mut progress: impl FnMut(Progress),
    ) -> Result<Vec<TileResult>, ConvertError> {
        let compositor = TileCompositor::new(&self.palette, &self.metric, &self.cache);
        compositor.convert(source, settings, &mut progress)
    }
}
