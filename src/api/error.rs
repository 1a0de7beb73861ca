//! Conversion errors.

use thiserror::Error;

use crate::output::TileError;

/// Errors raised by a conversion request.
///
/// All variants are structural and surface before or during tile
/// assembly; the pixel pass itself cannot fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A split count was zero, or the requested canvas would exceed
    /// representable image dimensions.
    #[error("Invalid tile split {split_w}x{split_h}")]
    InvalidSplit { split_w: u32, split_h: u32 },

    /// The source image has a zero dimension.
    #[error("Source image has no pixels")]
    EmptySource,

    /// A tile output could not be assembled.
    #[error("Tile error: {0}")]
    Tile(#[from] TileError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_split_message() {
        let error = ConvertError::InvalidSplit {
            split_w: 0,
            split_h: 2,
        };
        assert_eq!(error.to_string(), "Invalid tile split 0x2");
    }

    #[test]
    fn test_empty_source_message() {
        let error = ConvertError::EmptySource;
        assert_eq!(error.to_string(), "Source image has no pixels");
    }

    #[test]
    fn test_tile_error_converts() {
        let tile_error = TileError::InvalidBufferLength {
            len: 10,
            expected: 16384,
        };
        let error: ConvertError = tile_error.into();
        match error {
            ConvertError::Tile(_) => {}
            _ => panic!("Expected Tile variant"),
        }
        assert_eq!(
            error.to_string(),
            "Tile error: Index buffer has 10 bytes, expected 16384"
        );
    }
}
