//! Palette construction errors

use thiserror::Error;

/// Errors raised when building an [`IndexedPalette`](super::IndexedPalette).
///
/// All variants are structural: they describe an entry list that cannot
/// form a valid palette, detected before any pixel work happens.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Palette contains no colors")]
    EmptyPalette,

    #[error("Entry {index} uses index byte 0, reserved for transparency")]
    ReservedIndex { index: usize },

    #[error("Entry {index} reuses index byte {byte}")]
    DuplicateIndex { index: usize, byte: u8 },

    #[error("Duplicate color at entry {index}")]
    DuplicateColor { index: usize },

    #[error("Entry {index} is not fully opaque (alpha {alpha})")]
    NotOpaque { index: usize, alpha: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_message() {
        let error = PaletteError::EmptyPalette;
        assert_eq!(error.to_string(), "Palette contains no colors");
    }

    #[test]
    fn test_reserved_index_message() {
        let error = PaletteError::ReservedIndex { index: 3 };
        assert_eq!(
            error.to_string(),
            "Entry 3 uses index byte 0, reserved for transparency"
        );
    }

    #[test]
    fn test_duplicate_index_message() {
        let error = PaletteError::DuplicateIndex { index: 2, byte: 7 };
        assert_eq!(error.to_string(), "Entry 2 reuses index byte 7");
    }

    #[test]
    fn test_duplicate_color_message() {
        let error = PaletteError::DuplicateColor { index: 5 };
        assert_eq!(error.to_string(), "Duplicate color at entry 5");
    }

    #[test]
    fn test_not_opaque_message() {
        let error = PaletteError::NotOpaque {
            index: 1,
            alpha: 128,
        };
        assert_eq!(error.to_string(), "Entry 1 is not fully opaque (alpha 128)");
    }
}
