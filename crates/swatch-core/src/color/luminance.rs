//! WCAG 2.0 relative luminance

use super::rgba::Rgba;

/// Below this normalized channel value the sRGB curve is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Convert one 8-bit sRGB channel to linear light.
///
/// Uses the WCAG 2.0 constants (threshold 0.03928, not the IEC 0.04045).
#[inline]
pub fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c < LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color's RGB channels, in `[0.0, 1.0]`.
///
/// Alpha is ignored; callers composite translucent colors first.
pub fn relative_luminance(color: Rgba) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}
