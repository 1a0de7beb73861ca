//! Tile output unit and index-buffer reconstruction.

use image::RgbaImage;

use super::error::TileError;
use crate::palette::Palette;

/// Tile width in pixels, fixed for the whole system.
pub const TILE_WIDTH: u32 = 128;

/// Tile height in pixels, fixed for the whole system.
pub const TILE_HEIGHT: u32 = 128;

/// Bytes in one tile's index buffer (one byte per pixel).
pub const TILE_AREA: usize = (TILE_WIDTH * TILE_HEIGHT) as usize;

/// One produced tile of a conversion.
///
/// Owns three pieces: the cropped original-resolution sub-image, the
/// cropped quantized preview, and the index buffer of exactly
/// [`TILE_AREA`] bytes. The buffer is row-major with
/// `offset = TILE_WIDTH * (y % TILE_HEIGHT) + (x % TILE_WIDTH)` and is
/// the canonical persisted artifact; the two images exist for display.
///
/// # Example
///
/// ```
/// use tilequant::{Color, IndexedPalette, TileResult, TILE_AREA};
///
/// let palette = IndexedPalette::new(&[(1, Color::opaque(0, 0, 0))]).unwrap();
/// let tile = TileResult::from_indices(&vec![1u8; TILE_AREA], &palette).unwrap();
///
/// assert_eq!(tile.indices().len(), TILE_AREA);
/// assert_eq!(tile.preview().dimensions(), (128, 128));
/// ```
pub struct TileResult {
    original: RgbaImage,
    preview: RgbaImage,
    indices: Vec<u8>,
}

impl TileResult {
    /// Assemble a tile from its three parts.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidBufferLength`] if `indices` is not
    /// exactly [`TILE_AREA`] bytes. The buffer is never truncated or
    /// padded.
    pub fn new(
        original: RgbaImage,
        preview: RgbaImage,
        indices: Vec<u8>,
    ) -> Result<Self, TileError> {
        if indices.len() != TILE_AREA {
            return Err(TileError::InvalidBufferLength {
                len: indices.len(),
                expected: TILE_AREA,
            });
        }
        debug_assert_eq!(original.dimensions(), (TILE_WIDTH, TILE_HEIGHT));
        debug_assert_eq!(preview.dimensions(), (TILE_WIDTH, TILE_HEIGHT));

        Ok(Self {
            original,
            preview,
            indices,
        })
    }

    /// Rebuild a tile from a stored index buffer.
    ///
    /// The original and preview images are both set to the reconstructed
    /// canvas; nothing better exists for a tile loaded from storage.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidBufferLength`] if `indices` is not
    /// exactly [`TILE_AREA`] bytes.
    pub fn from_indices(indices: &[u8], palette: &dyn Palette) -> Result<Self, TileError> {
        let image = reconstruct(indices, palette)?;
        Ok(Self {
            original: image.clone(),
            preview: image,
            indices: indices.to_vec(),
        })
    }

    /// The cropped original-resolution sub-image.
    #[inline]
    pub fn original(&self) -> &RgbaImage {
        &self.original
    }

    /// The cropped quantized preview sub-image.
    #[inline]
    pub fn preview(&self) -> &RgbaImage {
        &self.preview
    }

    /// The index buffer, one byte per pixel in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}

/// Rebuild a displayable 128×128 image from a stored index buffer.
///
/// Each byte is looked up through [`Palette::byte_to_color`]; bytes with
/// no palette mapping (including the reserved transparent index 0) leave
/// their pixel fully transparent rather than failing the whole
/// reconstruction. No dithering or resizing is applied.
///
/// # Errors
///
/// Returns [`TileError::InvalidBufferLength`] if `indices` is not exactly
/// [`TILE_AREA`] bytes.
pub fn reconstruct(indices: &[u8], palette: &dyn Palette) -> Result<RgbaImage, TileError> {
    if indices.len() != TILE_AREA {
        return Err(TileError::InvalidBufferLength {
            len: indices.len(),
            expected: TILE_AREA,
        });
    }

    // Zero-filled canvas: every pixel starts fully transparent
    let mut image = RgbaImage::new(TILE_WIDTH, TILE_HEIGHT);
    for (o, &byte) in indices.iter().enumerate() {
        if let Some(color) = palette.byte_to_color(byte) {
            let x = (o % TILE_WIDTH as usize) as u32;
            let y = (o / TILE_WIDTH as usize) as u32;
            image.put_pixel(x, y, color.into());
        }
    }
    Ok(image)
}
