//! Image preprocessing for tile quantization.
//!
//! The only preprocessing step is resizing the source onto the exact
//! tile-grid canvas before the pixel pass. Resize happens first so the
//! quantizer walks a canvas whose dimensions are exact multiples of the
//! tile size, and so interpolation sees original color values rather
//! than quantized ones.

mod resize;

pub use resize::{resize_to_canvas, InterpolationMode};
