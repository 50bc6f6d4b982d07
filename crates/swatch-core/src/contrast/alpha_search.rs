//! Binary search for the lowest text opacity that still meets a contrast target.

use super::error::ContrastError;
use super::options::ContrastOptions;
use super::ratio::{calculate_contrast, ensure_opaque};
use crate::color::Rgba;

/// Find a low alpha for `foreground` that keeps `min_ratio` contrast on `background`.
///
/// Returns `Ok(None)` when even the fully opaque foreground falls short:
/// lowering alpha only moves the composite towards the background, so no
/// alpha can succeed.
///
/// Otherwise the alpha window `[0, 255]` is bisected until it is at most
/// `options.search_precision` wide or `options.max_search_iterations`
/// probes have run. The upper bound of the window is returned. It has
/// always been verified to meet `min_ratio`, so the result may be a few
/// steps above the true minimum but is never insufficient.
///
/// # Errors
///
/// [`ContrastError::TranslucentBackground`] if `background.a != 255`.
///
/// # Example
/// ```
/// use swatch_core::{calculate_contrast, find_minimum_alpha, ContrastOptions, Rgba};
///
/// let bg = Rgba::opaque(20, 30, 60);
/// let alpha = find_minimum_alpha(Rgba::WHITE, bg, 4.5, &ContrastOptions::default())
///     .unwrap()
///     .expect("white is readable on dark blue");
/// assert!(calculate_contrast(Rgba::WHITE.with_alpha(alpha), bg).unwrap() >= 4.5);
/// ```
pub fn find_minimum_alpha(
    foreground: Rgba,
    background: Rgba,
    min_ratio: f64,
    options: &ContrastOptions,
) -> Result<Option<u8>, ContrastError> {
    ensure_opaque(background)?;

    // A NaN target is never met
    let meets = |ratio: f64| ratio >= min_ratio;

    let opaque_ratio = calculate_contrast(foreground.with_alpha(u8::MAX), background)?;
    if !meets(opaque_ratio) {
        tracing::trace!(
            %foreground,
            %background,
            opaque_ratio,
            min_ratio,
            "Opaque foreground cannot reach contrast target"
        );
        return Ok(None);
    }

    // Widened so the midpoint sum cannot wrap
    let mut min_alpha: u16 = 0;
    let mut max_alpha: u16 = u16::from(u8::MAX);
    let precision = u16::from(options.search_precision);
    let mut iterations = 0u32;

    while iterations <= options.max_search_iterations && max_alpha - min_alpha > precision {
        let probe = (min_alpha + max_alpha) / 2;
        let ratio = calculate_contrast(foreground.with_alpha(probe as u8), background)?;
        if meets(ratio) {
            max_alpha = probe;
        } else {
            min_alpha = probe;
        }
        iterations += 1;
    }

    tracing::trace!(
        %foreground,
        %background,
        min_ratio,
        alpha = max_alpha,
        iterations,
        "Minimum alpha search converged"
    );

    Ok(Some(max_alpha as u8))
}
