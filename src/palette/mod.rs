//! Palette and distance-metric capabilities
//!
//! This module defines the two pluggable seams of the quantization engine:
//! the [`Palette`] trait (ordered opaque colors with one-byte indices) and
//! the [`DistanceMetric`] trait (dissimilarity scoring). [`IndexedPalette`]
//! is the provided concrete palette; [`EuclideanRgb`] and [`CieLab76`] are
//! the built-in metrics.

mod error;
mod metric;
mod palette;

pub use error::PaletteError;
pub use metric::{CieLab76, DistanceMetric, EuclideanRgb};
pub use palette::{IndexedPalette, Palette};
