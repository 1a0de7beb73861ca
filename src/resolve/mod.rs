//! Nearest-color resolution with memoization
//!
//! [`NearestColorResolver`] maps one pixel color to its best palette match
//! under a distance metric, short-circuiting transparent input and
//! memoizing results in a [`ColorCache`] shared for the lifetime of one
//! palette + metric pairing.

mod cache;
mod resolver;

pub use cache::ColorCache;
pub use resolver::{NearestColorResolver, ALPHA_THRESHOLD};
