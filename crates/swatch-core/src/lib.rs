//! swatch-core: palette extraction and readable text colors
//!
//! Two independent engines that only share the [`Rgba`] color type:
//!
//! - **Quantizer**: [`quantize`] reduces any number of pixel colors to a
//!   small palette with median cut.
//! - **Contrast engine**: [`select_text_colors`] picks title and body text
//!   colors that meet WCAG 2.0 contrast targets on a background, lowering
//!   the text opacity where the target allows.
//!
//! # Quick Start
//!
//! ```
//! use swatch_core::{quantize, select_text_colors, ContrastOptions, Rgba, TextColorPolicy};
//!
//! let pixels: Vec<Rgba> = (0..64u8)
//!     .map(|i| Rgba::opaque(i * 4, 32, 255 - i * 4))
//!     .collect();
//! let palette = quantize(pixels, 4).unwrap();
//!
//! let options = ContrastOptions::default();
//! for &swatch in &palette {
//!     let text = select_text_colors(swatch, TextColorPolicy::AlphaSearch, &options).unwrap();
//!     println!("{swatch}: title {} body {}", text.title, text.body);
//! }
//! ```
//!
//! # Median Cut
//!
//! All input colors start in one box. The most populous box (the oldest
//! one on ties) is sorted along one channel and cut at its median, lower
//! half into a new box, until the requested number of boxes exists. Each
//! box then contributes its truncated mean as an opaque color.
//!
//! The sort channel follows a fixed rule that existing palettes depend on:
//!
//! | Per-channel ranges | Sort channel |
//! |--------------------|--------------|
//! | red strictly widest | red |
//! | blue strictly widest | **green** |
//! | anything else (including ties) | blue |
//!
//! See [`Axis::select`].
//!
//! # Contrast
//!
//! Contrast uses WCAG 2.0 relative luminance with the 0.03928 linear
//! threshold and the 0.05 flare offset:
//!
//! ```text
//! ratio = (L_lighter + 0.05) / (L_darker + 0.05)        in [1, 21]
//! ```
//!
//! Translucent text is composited over the (necessarily opaque) background
//! before measuring. [`find_minimum_alpha`] bisects the alpha range and
//! always returns an alpha that has been verified to meet the target.

pub mod color;
pub mod contrast;
pub mod error;
pub mod quantize;


pub use color::{ParseColorError, Rgba};
pub use contrast::{
    calculate_contrast, find_minimum_alpha, select_text_colors, ContrastError, ContrastOptions,
    ParsePolicyError, TextColorPolicy, TextColors,
};
pub use error::SwatchError;
pub use quantize::{quantize, Axis, Palette, QuantizeError};
