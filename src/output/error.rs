//! Tile output errors

use thiserror::Error;

/// Errors raised when building or reconstructing tile outputs.
#[derive(Debug, Error)]
pub enum TileError {
    /// The index buffer does not hold exactly one byte per tile pixel.
    ///
    /// Fatal to the call that received the buffer; buffers are never
    /// truncated or padded to fit.
    #[error("Index buffer has {len} bytes, expected {expected}")]
    InvalidBufferLength { len: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_buffer_length_message() {
        let error = TileError::InvalidBufferLength {
            len: 100,
            expected: 16384,
        };
        assert_eq!(
            error.to_string(),
            "Index buffer has 100 bytes, expected 16384"
        );
    }
}
