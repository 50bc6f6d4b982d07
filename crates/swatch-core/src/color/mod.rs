//! Color value type and the arithmetic built on it
//!
//! Every color in the engine is an 8-bit-per-channel RGBA value with
//! straight (non-premultiplied) alpha. The quantizer and the contrast
//! engine only ever exchange [`Rgba`] values.
//!
//! # Example
//!
//! ```
//! use swatch_core::Rgba;
//!
//! let teal: Rgba = "#008080".parse().unwrap();
//! assert!(teal.is_opaque());
//!
//! // Half-transparent white composited over teal
//! let over = swatch_core::color::composite(Rgba::WHITE.with_alpha(128), teal);
//! assert_eq!(over.a, 255);
//! ```

mod composite;
mod error;
mod luminance;
mod rgba;

pub use composite::{composite, composite_alpha, composite_component};
pub use error::ParseColorError;
pub use luminance::{linearize, relative_luminance};
pub use rgba::Rgba;
