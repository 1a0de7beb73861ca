//! Resizing onto the tile-grid canvas.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::output::{TILE_HEIGHT, TILE_WIDTH};

/// Interpolation policy for scaling the source onto the tile canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMode {
    /// Choose by source size: bicubic for sources strictly larger than
    /// one tile in both dimensions, nearest-neighbor otherwise. Small
    /// sources are typically pixel art and stay crisp.
    #[default]
    Auto,
    /// Nearest-neighbor sampling.
    NearestNeighbor,
    /// High-quality bicubic (Catmull-Rom) resampling.
    HighQualityBicubic,
}

impl InterpolationMode {
    /// The resampling filter to use for a source of the given dimensions.
    pub fn filter_for(self, width: u32, height: u32) -> FilterType {
        match self {
            InterpolationMode::NearestNeighbor => FilterType::Nearest,
            InterpolationMode::HighQualityBicubic => FilterType::CatmullRom,
            InterpolationMode::Auto => {
                if width > TILE_WIDTH && height > TILE_HEIGHT {
                    FilterType::CatmullRom
                } else {
                    FilterType::Nearest
                }
            }
        }
    }
}

/// Scale `image` onto a `target_w` × `target_h` canvas.
///
/// With `stretch`, the source is scaled directly to the target
/// dimensions, ignoring aspect ratio. Without it, the source is scaled
/// by the largest uniform factor that fits inside the target and
/// centered on a fully transparent canvas; the surrounding border stays
/// transparent and later quantizes to the reserved index 0.
///
/// A source already at the target dimensions is returned as-is under
/// either policy.
pub fn resize_to_canvas(
    image: &RgbaImage,
    target_w: u32,
    target_h: u32,
    mode: InterpolationMode,
    stretch: bool,
) -> RgbaImage {
    if image.dimensions() == (target_w, target_h) {
        return image.clone();
    }

    let filter = mode.filter_for(image.width(), image.height());

    if stretch {
        return imageops::resize(image, target_w, target_h, filter);
    }

    let scale = f64::min(
        target_w as f64 / image.width() as f64,
        target_h as f64 / image.height() as f64,
    );
    let scaled_w = ((image.width() as f64 * scale).round() as u32).max(1);
    let scaled_h = ((image.height() as f64 * scale).round() as u32).max(1);

    let scaled = imageops::resize(image, scaled_w, scaled_h, filter);

    // RgbaImage::new zero-fills: the border is fully transparent
    let mut canvas = RgbaImage::new(target_w, target_h);
    let off_x = (target_w - scaled_w) / 2;
    let off_y = (target_h - scaled_h) / 2;
    imageops::overlay(&mut canvas, &scaled, off_x as i64, off_y as i64);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn flat(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(px))
    }

    #[test]
    fn test_auto_picks_bicubic_only_above_tile_size() {
        let auto = InterpolationMode::Auto;
        assert!(matches!(auto.filter_for(129, 129), FilterType::CatmullRom));
        assert!(matches!(auto.filter_for(128, 129), FilterType::Nearest));
        assert!(matches!(auto.filter_for(129, 128), FilterType::Nearest));
        assert!(matches!(auto.filter_for(64, 64), FilterType::Nearest));
    }

    #[test]
    fn test_explicit_modes_ignore_source_size() {
        assert!(matches!(
            InterpolationMode::NearestNeighbor.filter_for(1000, 1000),
            FilterType::Nearest
        ));
        assert!(matches!(
            InterpolationMode::HighQualityBicubic.filter_for(8, 8),
            FilterType::CatmullRom
        ));
    }

    #[test]
    fn test_exact_size_source_passes_through() {
        let source = flat(256, 256, [10, 20, 30, 255]);
        let resized = resize_to_canvas(&source, 256, 256, InterpolationMode::Auto, true);
        assert_eq!(resized, source);

        let letterboxed = resize_to_canvas(&source, 256, 256, InterpolationMode::Auto, false);
        assert_eq!(letterboxed, source);
    }

    #[test]
    fn test_stretch_hits_exact_target_dimensions() {
        let source = flat(100, 30, [200, 0, 0, 255]);
        let resized =
            resize_to_canvas(&source, 256, 128, InterpolationMode::NearestNeighbor, true);
        assert_eq!(resized.dimensions(), (256, 128));
        // Flat input stays flat regardless of filter
        assert_eq!(*resized.get_pixel(0, 0), Rgba([200, 0, 0, 255]));
        assert_eq!(*resized.get_pixel(255, 127), Rgba([200, 0, 0, 255]));
    }

    #[test]
    fn test_letterbox_centers_wide_source_vertically() {
        // 2:1 source into a square target: scaled to 256x128, 64px bands
        let source = flat(512, 256, [0, 200, 0, 255]);
        let result =
            resize_to_canvas(&source, 256, 256, InterpolationMode::NearestNeighbor, false);

        assert_eq!(result.dimensions(), (256, 256));
        assert_eq!(*result.get_pixel(128, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*result.get_pixel(128, 63), Rgba([0, 0, 0, 0]));
        assert_eq!(*result.get_pixel(128, 64), Rgba([0, 200, 0, 255]));
        assert_eq!(*result.get_pixel(128, 191), Rgba([0, 200, 0, 255]));
        assert_eq!(*result.get_pixel(128, 192), Rgba([0, 0, 0, 0]));
        assert_eq!(*result.get_pixel(128, 255), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_letterbox_centers_tall_source_horizontally() {
        let source = flat(128, 256, [0, 0, 200, 255]);
        let result =
            resize_to_canvas(&source, 256, 256, InterpolationMode::NearestNeighbor, false);

        assert_eq!(result.dimensions(), (256, 256));
        assert_eq!(*result.get_pixel(0, 128), Rgba([0, 0, 0, 0]));
        assert_eq!(*result.get_pixel(63, 128), Rgba([0, 0, 0, 0]));
        assert_eq!(*result.get_pixel(64, 128), Rgba([0, 0, 200, 255]));
        assert_eq!(*result.get_pixel(191, 128), Rgba([0, 0, 200, 255]));
        assert_eq!(*result.get_pixel(192, 128), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_letterbox_upscales_small_source() {
        let source = flat(64, 64, [50, 60, 70, 255]);
        let result =
            resize_to_canvas(&source, 128, 128, InterpolationMode::NearestNeighbor, false);
        assert_eq!(result.dimensions(), (128, 128));
        // Square source into square target fills it completely
        assert_eq!(*result.get_pixel(0, 0), Rgba([50, 60, 70, 255]));
        assert_eq!(*result.get_pixel(127, 127), Rgba([50, 60, 70, 255]));
    }
}
