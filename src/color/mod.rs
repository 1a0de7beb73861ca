//! Color types and conversions
//!
//! This module provides the ARGB color value type used throughout the
//! quantization pipeline. Equality is exact and channel-wise, which makes
//! [`Color`] usable as a memoization key.

mod argb;

pub use argb::Color;
