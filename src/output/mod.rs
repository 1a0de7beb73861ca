//! Conversion outputs and reconstruction
//!
//! This module provides [`TileResult`], the per-tile output unit of a
//! conversion (original crop, quantized preview crop, and the canonical
//! index buffer), and [`reconstruct`], the inverse path from a stored
//! index buffer back to a displayable image.

mod error;
mod tile;

pub use error::TileError;
pub use tile::{reconstruct, TileResult, TILE_AREA, TILE_HEIGHT, TILE_WIDTH};
