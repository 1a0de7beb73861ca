//! Error diffusion dithering
//!
//! Floyd-Steinberg error diffusion over the working canvas. The diffusion
//! runs interleaved with quantization: each pixel's residual error is
//! pushed to its four forward neighbors immediately after the pixel is
//! resolved, so later pixels are read with accumulated error already
//! applied.

mod floyd_steinberg;

pub use floyd_steinberg::{diffuse, diffuse_error, QuantError, FLOYD_STEINBERG};
