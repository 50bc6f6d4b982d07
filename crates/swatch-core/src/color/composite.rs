//! Straight-alpha "over" compositing in 8-bit integer arithmetic
//!
//! All intermediate products are widened to `u32`; the largest term,
//! `255 * 255 * 255`, fits comfortably.

use super::rgba::Rgba;

const MAX: u32 = u8::MAX as u32;

/// Alpha of `foreground` composited over `background`.
#[inline]
pub fn composite_alpha(foreground_alpha: u8, background_alpha: u8) -> u8 {
    let fg = u32::from(foreground_alpha);
    let bg = u32::from(background_alpha);
    (MAX - ((MAX - bg) * (MAX - fg)) / MAX) as u8
}

/// One channel of `foreground` composited over `background`.
///
/// `alpha` is the composite alpha from [`composite_alpha`]. A fully
/// transparent composite yields 0.
#[inline]
pub fn composite_component(fg_c: u8, fg_a: u8, bg_c: u8, bg_a: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        return 0;
    }
    let (fg_c, fg_a) = (u32::from(fg_c), u32::from(fg_a));
    let (bg_c, bg_a) = (u32::from(bg_c), u32::from(bg_a));
    let value = (MAX * fg_c * fg_a + bg_c * bg_a * (MAX - fg_a)) / (u32::from(alpha) * MAX);
    value.min(MAX) as u8
}

/// Composite `foreground` over `background`.
///
/// # Example
/// ```
/// use swatch_core::{color::composite, Rgba};
///
/// let over = composite(Rgba::WHITE.with_alpha(0), Rgba::opaque(10, 20, 30));
/// assert_eq!(over, Rgba::opaque(10, 20, 30));
/// ```
pub fn composite(foreground: Rgba, background: Rgba) -> Rgba {
    let a = composite_alpha(foreground.a, background.a);
    Rgba {
        r: composite_component(foreground.r, foreground.a, background.r, background.a, a),
        g: composite_component(foreground.g, foreground.a, background.g, background.a, a),
        b: composite_component(foreground.b, foreground.a, background.b, background.a, a),
        a,
    }
}
