//! tilequant: Fixed-palette tile quantization with Floyd-Steinberg dithering
//!
//! This library converts arbitrary RGBA images into grids of 128x128 tiles
//! whose pixels come from a small caller-supplied palette of opaque colors.
//! Each tile carries a crop of the original image, a quantized preview, and
//! a compact one-byte-per-pixel index buffer that can be stored and later
//! reconstructed into a displayable image.
//!
//! # Quick Start
//!
//! The [`TileQuantizer`] builder is the primary entry point:
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use tilequant::{Color, ConversionSettings, IndexedPalette, TileQuantizer};
//!
//! let palette = IndexedPalette::new(&[
//!     (1, Color::opaque(0, 0, 0)),
//!     (2, Color::opaque(255, 255, 255)),
//! ])
//! .unwrap();
//!
//! let quantizer = TileQuantizer::new(palette);
//! let source = RgbaImage::from_pixel(256, 128, Rgba([200, 200, 200, 255]));
//! let tiles = quantizer
//!     .convert(&source, &ConversionSettings::new().split(2, 1))
//!     .unwrap();
//!
//! assert_eq!(tiles.len(), 2);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA source                  (any dimensions)
//!     |
//!     v
//! resize_to_canvas             (to 128*splitW x 128*splitH)
//!     |
//!     v
//! single row-major pass over the canvas:
//!     read pixel
//!         |
//!     NearestColorResolver     (alpha gate, cache, metric scan)
//!         |
//!     write resolved color back to the canvas
//!         |
//!     diffuse residual error   (Floyd-Steinberg, optional)
//!         |
//!     index byte into the owning tile's buffer
//!     |
//!     v
//! Vec<TileResult>              (original crop + preview crop + 16384 bytes)
//! ```
//!
//! The pass is strictly sequential: error diffusion makes every pixel's
//! input depend on the resolution of the pixels before it, so rows cannot
//! be reordered or parallelized without changing the output.
//!
//! # Nearest-Color Resolution
//!
//! Pixels whose alpha channel falls below [`ALPHA_THRESHOLD`] resolve to
//! the transparent sentinel before any palette work happens. Everything
//! else is matched against the palette's opaque entries with a pluggable
//! [`DistanceMetric`]; ties keep the entry listed first, so palette order
//! is part of the conversion's observable behavior. Results are memoized
//! in a [`ColorCache`] owned by the quantizer -- the cache lives exactly
//! as long as one palette + metric pairing and is discarded when the
//! metric changes.
//!
//! Two metrics are built in:
//!
//! - [`EuclideanRgb`]: squared distance in sRGB channel space (default)
//! - [`CieLab76`]: CIE76 delta E in L*a*b*, perceptually closer at the
//!   cost of a per-comparison color space conversion
//!
//! # Dithering
//!
//! Error diffusion uses the classic Floyd-Steinberg kernel with integer
//! arithmetic: each channel's residual is scaled by `(error * weight) >> 4`
//! and the arithmetic shift floors toward negative infinity, which differs
//! from truncating division for negative residuals. Neighbors that fall
//! outside the canvas are skipped, so their share of the error is dropped
//! rather than redistributed.
//!
//! # Reconstruction
//!
//! [`reconstruct`] is the inverse path: a stored 16384-byte index buffer
//! becomes a 128x128 image again. A wrong buffer length is a hard error;
//! an index byte the palette does not know decodes to a transparent pixel
//! so that one corrupt byte cannot take down a whole tile.

pub mod api;
pub mod color;
pub mod compose;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod resolve;


pub use api::{ConversionSettings, ConvertError, TileQuantizer};
pub use color::Color;
pub use compose::{Progress, TileCompositor};
pub use dither::QuantError;
pub use output::{reconstruct, TileError, TileResult, TILE_AREA, TILE_HEIGHT, TILE_WIDTH};
pub use palette::{CieLab76, DistanceMetric, EuclideanRgb, IndexedPalette, Palette, PaletteError};
pub use preprocess::InterpolationMode;
pub use resolve::{ColorCache, NearestColorResolver, ALPHA_THRESHOLD};
