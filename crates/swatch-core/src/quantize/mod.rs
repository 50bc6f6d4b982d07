//! Median-cut color quantization
//!
//! Reduces an arbitrary collection of pixel colors to a small palette by
//! recursively cutting the most populous box of colors at the median of
//! its widest channel, then averaging each box.

mod color_box;
mod error;
mod median_cut;
mod palette;

pub use color_box::{Axis, Bounds, ColorBox};
pub use error::QuantizeError;
pub use median_cut::quantize;
pub use palette::Palette;

pub(crate) use median_cut::subdivide;
