//! Full-canvas quantization pass and tile assembly
//!
//! [`TileCompositor`] walks the resized canvas once in row-major order,
//! resolving and writing back every pixel (diffusing error when enabled),
//! and slices the result into per-tile index buffers and preview crops.

mod compositor;

pub use compositor::{Progress, TileCompositor};
