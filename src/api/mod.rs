//! Public API for the tilequant crate.
//!
//! This module provides the high-level API: the [`TileQuantizer`] builder,
//! [`ConversionSettings`], and the unified [`ConvertError`] type.

mod builder;
mod error;
mod settings;

pub use builder::TileQuantizer;
pub use error::ConvertError;
pub use settings::ConversionSettings;
