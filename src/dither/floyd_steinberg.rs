//! Floyd-Steinberg error diffusion.
//!
//! Distributes 100% of the quantization error of each pixel to 4 forward
//! neighbors. Because three of the receivers sit in the next row, the
//! pass over the canvas must be strictly row-major, left-to-right,
//! top-to-bottom; it cannot be reordered or parallelized across rows.

use image::RgbaImage;

use crate::color::Color;

/// The Floyd-Steinberg kernel: `(dx, dy, weight)` out of a divisor of 16.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights sum to 16, so the full error is conserved across the four
/// receivers (except where a receiver falls outside the canvas).
pub const FLOYD_STEINBERG: [(i32, i32, i32); 4] = [
    (1, 0, 7),  // right
    (-1, 1, 3), // bottom-left
    (0, 1, 5),  // bottom
    (1, 1, 1),  // bottom-right
];

/// Per-channel quantization error at one pixel.
///
/// Computed once per channel when a pixel is quantized: the signed
/// difference between the color that was read and the palette color that
/// replaced it. Channel range is -255..=255.
#[derive(Debug, Clone, Copy)]
pub struct QuantError {
    pub a: i32,
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl QuantError {
    /// Error left behind when `original` was replaced by `quantized`.
    #[inline]
    pub fn between(original: Color, quantized: Color) -> Self {
        Self {
            a: original.a as i32 - quantized.a as i32,
            r: original.r as i32 - quantized.r as i32,
            g: original.g as i32 - quantized.g as i32,
            b: original.b as i32 - quantized.b as i32,
        }
    }
}

/// Diffuse the full kernel for the pixel at `(x, y)`.
///
/// Applies each kernel entry in order via [`diffuse_error`]. Neighbors
/// outside the canvas are skipped with no redistribution of their share.
#[inline]
pub fn diffuse(canvas: &mut RgbaImage, x: u32, y: u32, error: QuantError) {
    for &(dx, dy, weight) in FLOYD_STEINBERG.iter() {
        diffuse_error(
            canvas,
            x as i64 + dx as i64,
            y as i64 + dy as i64,
            error,
            weight,
        );
    }
}

/// Add one weighted share of a quantization error to the pixel at the
/// target coordinates.
///
/// Each channel becomes `clamp(old + (error * weight) >> 4, 0, 255)`.
/// The shift is arithmetic, so negative products floor toward negative
/// infinity; this is deliberate and must not be replaced by division,
/// which truncates toward zero and produces different pixels.
///
/// Targets outside the canvas (`x < 0`, `y < 0`, `x >= width`,
/// `y >= height`) are silently skipped.
pub fn diffuse_error(canvas: &mut RgbaImage, x: i64, y: i64, error: QuantError, weight: i32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }

    let px = canvas.get_pixel_mut(x as u32, y as u32);
    px[3] = add_scaled(px[3], error.a, weight);
    px[0] = add_scaled(px[0], error.r, weight);
    px[1] = add_scaled(px[1], error.g, weight);
    px[2] = add_scaled(px[2], error.b, weight);
}

#[inline]
fn add_scaled(old: u8, error: i32, weight: i32) -> u8 {
    (old as i32 + ((error * weight) >> 4)).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn flat_canvas(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(px))
    }

    #[test]
    fn test_kernel_weights_sum_to_sixteen() {
        let total: i32 = FLOYD_STEINBERG.iter().map(|&(_, _, w)| w).sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn test_kernel_order_and_offsets() {
        assert_eq!(
            FLOYD_STEINBERG,
            [(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)]
        );
    }

    #[test]
    fn test_positive_error_exact_arithmetic() {
        let mut canvas = flat_canvas(3, 1, [10, 10, 10, 255]);
        let error = QuantError {
            a: 0,
            r: 16,
            g: 32,
            b: 48,
        };

        diffuse_error(&mut canvas, 1, 0, error, 7);

        let px = canvas.get_pixel(1, 0);
        // (16*7)>>4 = 7, (32*7)>>4 = 14, (48*7)>>4 = 21
        assert_eq!(px[0], 17);
        assert_eq!(px[1], 24);
        assert_eq!(px[2], 31);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_negative_error_floors_toward_negative_infinity() {
        let mut canvas = flat_canvas(1, 1, [10, 10, 10, 255]);
        let error = QuantError {
            a: 0,
            r: -1,
            g: 0,
            b: 0,
        };

        diffuse_error(&mut canvas, 0, 0, error, 7);

        // (-1*7)>>4 = -1 under arithmetic shift. Truncating division
        // would give 0 and leave the pixel unchanged.
        assert_eq!(canvas.get_pixel(0, 0)[0], 9);
    }

    #[test]
    fn test_channels_clamp_to_byte_range() {
        let mut canvas = flat_canvas(1, 1, [250, 5, 128, 255]);
        let error = QuantError {
            a: 0,
            r: 255,
            g: -255,
            b: 0,
        };

        diffuse_error(&mut canvas, 0, 0, error, 16);

        let px = canvas.get_pixel(0, 0);
        assert_eq!(px[0], 255, "overflow clamps to 255");
        assert_eq!(px[1], 0, "underflow clamps to 0");
        assert_eq!(px[2], 128);
    }

    #[test]
    fn test_alpha_channel_receives_error() {
        let mut canvas = flat_canvas(1, 1, [0, 0, 0, 100]);
        let error = QuantError {
            a: 64,
            r: 0,
            g: 0,
            b: 0,
        };

        diffuse_error(&mut canvas, 0, 0, error, 16);
        assert_eq!(canvas.get_pixel(0, 0)[3], 164);
    }

    #[test]
    fn test_out_of_bounds_targets_skipped() {
        let mut canvas = flat_canvas(2, 2, [50, 50, 50, 255]);
        let error = QuantError {
            a: 0,
            r: 160,
            g: 160,
            b: 160,
        };

        diffuse_error(&mut canvas, -1, 0, error, 7);
        diffuse_error(&mut canvas, 0, -1, error, 7);
        diffuse_error(&mut canvas, 2, 0, error, 7);
        diffuse_error(&mut canvas, 0, 2, error, 7);

        for (_, _, px) in canvas.enumerate_pixels() {
            assert_eq!(*px, Rgba([50, 50, 50, 255]));
        }
    }

    #[test]
    fn test_diffuse_hits_all_four_neighbors() {
        let mut canvas = flat_canvas(3, 2, [100, 100, 100, 255]);
        let error = QuantError {
            a: 0,
            r: 160,
            g: 0,
            b: 0,
        };

        // Source pixel is (1, 0); receivers are (2,0), (0,1), (1,1), (2,1)
        diffuse(&mut canvas, 1, 0, error);

        // (160*w)>>4 = 10*w
        assert_eq!(canvas.get_pixel(2, 0)[0], 100 + 70);
        assert_eq!(canvas.get_pixel(0, 1)[0], 100 + 30);
        assert_eq!(canvas.get_pixel(1, 1)[0], 100 + 50);
        assert_eq!(canvas.get_pixel(2, 1)[0], 100 + 10);
        // Source and untouched pixels unchanged
        assert_eq!(canvas.get_pixel(1, 0)[0], 100);
        assert_eq!(canvas.get_pixel(0, 0)[0], 100);
    }

    #[test]
    fn test_diffuse_at_canvas_corner_skips_outside() {
        let mut canvas = flat_canvas(2, 2, [100, 100, 100, 255]);
        let error = QuantError {
            a: 0,
            r: 160,
            g: 0,
            b: 0,
        };

        // Bottom-right corner: every receiver is out of bounds
        diffuse(&mut canvas, 1, 1, error);

        for (_, _, px) in canvas.enumerate_pixels() {
            assert_eq!(px[0], 100);
        }
    }
}
