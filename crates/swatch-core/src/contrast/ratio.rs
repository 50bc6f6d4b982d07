//! WCAG 2.0 contrast ratio.

use super::error::ContrastError;
use crate::color::{composite, relative_luminance, Rgba};

/// Reject backgrounds that are not fully opaque.
#[inline]
pub fn ensure_opaque(background: Rgba) -> Result<(), ContrastError> {
    if background.is_opaque() {
        Ok(())
    } else {
        Err(ContrastError::TranslucentBackground {
            alpha: background.a,
        })
    }
}

/// Contrast ratio of `foreground` on `background`, in `[1.0, 21.0]`.
///
/// A translucent foreground is composited over the background first, so
/// the ratio describes what is actually seen.
///
/// # Errors
///
/// [`ContrastError::TranslucentBackground`] if `background.a != 255`.
///
/// # Example
/// ```
/// use swatch_core::{calculate_contrast, Rgba};
///
/// let ratio = calculate_contrast(Rgba::WHITE, Rgba::BLACK).unwrap();
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn calculate_contrast(foreground: Rgba, background: Rgba) -> Result<f64, ContrastError> {
    ensure_opaque(background)?;

    let foreground = if foreground.is_opaque() {
        foreground
    } else {
        composite(foreground, background)
    };

    let l1 = relative_luminance(foreground) + 0.05;
    let l2 = relative_luminance(background) + 0.05;
    Ok(l1.max(l2) / l1.min(l2))
}
