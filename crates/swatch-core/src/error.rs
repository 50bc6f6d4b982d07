//! Unified error type for the swatch-core public API.
//!
//! [`SwatchError`] wraps every error type in the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::color::ParseColorError;
use crate::contrast::{ContrastError, ParsePolicyError};
use crate::quantize::QuantizeError;

/// Unified error type for the swatch-core public API.
///
/// # Example
///
/// ```
/// use swatch_core::{quantize, Palette, Rgba, SwatchError};
///
/// fn palette_of(hex: &[&str]) -> Result<Palette, SwatchError> {
///     let colors = hex
///         .iter()
///         .map(|h| h.parse::<Rgba>())
///         .collect::<Result<Vec<_>, _>>()?;
///     Ok(quantize(colors, 2)?)
/// }
///
/// assert!(palette_of(&["#000", "#fff"]).is_ok());
/// assert!(matches!(palette_of(&[]), Err(SwatchError::Quantize(_))));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwatchError {
    /// Quantizer input error (empty input or zero palette size)
    #[error("quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    /// Contrast precondition violation (translucent background)
    #[error("contrast error: {0}")]
    Contrast(#[from] ContrastError),

    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Unknown text color policy name
    #[error("policy error: {0}")]
    Policy(#[from] ParsePolicyError),
}
