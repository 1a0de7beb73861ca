//! The full-canvas pixel pass.

use image::imageops;
use image::RgbaImage;

use crate::api::{ConversionSettings, ConvertError};
use crate::color::Color;
use crate::dither::{diffuse, QuantError};
use crate::output::{TileResult, TILE_AREA, TILE_HEIGHT, TILE_WIDTH};
use crate::palette::{DistanceMetric, Palette};
use crate::preprocess::resize_to_canvas;
use crate::resolve::{ColorCache, NearestColorResolver};

/// Fractional conversion progress, emitted once per completed canvas row.
///
/// Values are monotonically non-decreasing across one conversion and the
/// final emission is exactly `1.0`. The callback is fire-and-continue:
/// the pass never waits on the consumer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Completed fraction of the canvas, in `0.0..=1.0`.
    pub fraction: f64,
}

/// Drives the conversion of one image into tiles.
///
/// The compositor binds a palette, metric, and cache, then walks the
/// resized canvas exactly once per [`convert`](Self::convert) call:
/// resolve each pixel, write the result back, optionally diffuse the
/// residual error forward, and record the pixel's index byte into its
/// tile buffer. The pass is strictly sequential in row-major order;
/// dithering makes each pixel depend on error pushed from pixels above
/// and to its left.
pub struct TileCompositor<'a> {
    resolver: NearestColorResolver<'a>,
    palette: &'a dyn Palette,
    cache: &'a ColorCache,
}

impl<'a> TileCompositor<'a> {
    pub fn new(
        palette: &'a dyn Palette,
        metric: &'a dyn DistanceMetric,
        cache: &'a ColorCache,
    ) -> Self {
        Self {
            resolver: NearestColorResolver::new(palette, metric, cache),
            palette,
            cache,
        }
    }

    /// Convert `source` into `split_w * split_h` tiles.
    ///
    /// The source is resized to the exact
    /// `128 * split_w` × `128 * split_h` canvas first; the returned tiles
    /// appear in row-major grid order. `progress` is invoked once per
    /// completed canvas row.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidSplit`] if a split count is zero or the
    ///   canvas would not fit `u32` dimensions
    /// - [`ConvertError::EmptySource`] if the source has a zero dimension
    pub fn convert(
        &self,
        source: &RgbaImage,
        settings: &ConversionSettings,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<Vec<TileResult>, ConvertError> {
        let split_w = settings.split_w;
        let split_h = settings.split_h;

        if split_w == 0 || split_h == 0 {
            return Err(ConvertError::InvalidSplit { split_w, split_h });
        }
        let (target_w, target_h) = match (
            TILE_WIDTH.checked_mul(split_w),
            TILE_HEIGHT.checked_mul(split_h),
        ) {
            (Some(w), Some(h)) => (w, h),
            _ => return Err(ConvertError::InvalidSplit { split_w, split_h }),
        };
        if source.width() == 0 || source.height() == 0 {
            return Err(ConvertError::EmptySource);
        }

        tracing::debug!(
            source_w = source.width(),
            source_h = source.height(),
            canvas_w = target_w,
            canvas_h = target_h,
            split_w,
            split_h,
            dither = settings.dither,
            "starting tile conversion"
        );

        let mut canvas = resize_to_canvas(
            source,
            target_w,
            target_h,
            settings.interpolation,
            settings.stretch,
        );
        // Pristine post-resize copy for the original crops
        let original = canvas.clone();

        let tile_count = split_w as usize * split_h as usize;
        let mut buffers = vec![vec![0u8; TILE_AREA]; tile_count];

        for y in 0..target_h {
            for x in 0..target_w {
                let current = Color::from(*canvas.get_pixel(x, y));
                let resolved = self.resolver.resolve(current);
                canvas.put_pixel(x, y, resolved.into());

                if settings.dither {
                    let error = QuantError::between(current, resolved);
                    diffuse(&mut canvas, x, y, error);
                }

                let tile_index = ((y / TILE_HEIGHT) * split_w + (x / TILE_WIDTH)) as usize;
                let offset = (TILE_WIDTH * (y % TILE_HEIGHT) + (x % TILE_WIDTH)) as usize;
                buffers[tile_index][offset] = if resolved == Color::TRANSPARENT {
                    0
                } else {
                    self.palette.color_to_byte(resolved)
                };
            }
            progress(Progress {
                fraction: (y + 1) as f64 / target_h as f64,
            });
        }

        let mut tiles = Vec::with_capacity(tile_count);
        for (i, indices) in buffers.into_iter().enumerate() {
            let tile_x = (i as u32 % split_w) * TILE_WIDTH;
            let tile_y = (i as u32 / split_w) * TILE_HEIGHT;
            let original_crop =
                imageops::crop_imm(&original, tile_x, tile_y, TILE_WIDTH, TILE_HEIGHT).to_image();
            let preview_crop =
                imageops::crop_imm(&canvas, tile_x, tile_y, TILE_WIDTH, TILE_HEIGHT).to_image();
            tiles.push(TileResult::new(original_crop, preview_crop, indices)?);
        }

        tracing::debug!(
            tiles = tiles.len(),
            cached_colors = self.cache.len(),
            "tile conversion complete"
        );
        Ok(tiles)
    }
}
