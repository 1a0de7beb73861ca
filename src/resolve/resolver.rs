//! Nearest palette color search.

use super::cache::ColorCache;
use crate::color::Color;
use crate::palette::{DistanceMetric, Palette};

/// Alpha values below this snap to full transparency before any palette
/// search; values at or above it are treated as fully opaque input.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Resolves pixel colors to their nearest palette match.
///
/// A resolver borrows one palette, one metric, and one cache for the
/// duration of a conversion pass. Resolution order per pixel:
///
/// 1. Alpha below [`ALPHA_THRESHOLD`]: return [`Color::TRANSPARENT`]
///    without touching the palette or the cache.
/// 2. Cache hit on the exact 4-channel value: return the memoized color
///    unchanged, no re-scoring.
/// 3. Scan palette entries in enumeration order, skipping any entry that
///    is not fully opaque, and keep the strictly smallest distance. Ties
///    keep the earliest entry. The winner is cached before it is
///    returned.
///
/// The palette is expected to contain at least one opaque entry; a scan
/// that finds none returns [`Color::TRANSPARENT`] without caching. The
/// hot loop performs no other validation.
pub struct NearestColorResolver<'a> {
    palette: &'a dyn Palette,
    metric: &'a dyn DistanceMetric,
    cache: &'a ColorCache,
}

impl<'a> NearestColorResolver<'a> {
    pub fn new(
        palette: &'a dyn Palette,
        metric: &'a dyn DistanceMetric,
        cache: &'a ColorCache,
    ) -> Self {
        Self {
            palette,
            metric,
            cache,
        }
    }

    /// Resolve one pixel color to its nearest palette color, or the
    /// transparency sentinel for sub-threshold alpha.
    pub fn resolve(&self, pixel: Color) -> Color {
        if pixel.a < ALPHA_THRESHOLD {
            return Color::TRANSPARENT;
        }

        if let Some(hit) = self.cache.get(pixel) {
            return hit;
        }

        let mut best: Option<Color> = None;
        let mut best_dist = f64::INFINITY;

        for &entry in self.palette.colors() {
            if !entry.is_opaque() {
                continue;
            }
            let dist = self.metric.distance(pixel, entry);
            // Strict comparison: equal distances keep the earlier entry
            if dist < best_dist {
                best_dist = dist;
                best = Some(entry);
            }
        }

        match best {
            Some(color) => {
                self.cache.insert(pixel, color);
                color
            }
            None => Color::TRANSPARENT,
        }
    }
}
