//! Title and body text colors for a background swatch.

use super::alpha_search::find_minimum_alpha;
use super::error::ContrastError;
use super::options::{ContrastOptions, TextColorPolicy};
use super::ratio::{calculate_contrast, ensure_opaque};
use crate::color::{composite, Rgba};

/// Text colors chosen for one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    /// Color for title text (held to the stricter threshold)
    pub title: Rgba,
    /// Color for body text
    pub body: Rgba,
}

impl TextColors {
    /// Composite both colors over `background`.
    ///
    /// For consumers that cannot express alpha. With an opaque background
    /// the results are opaque and look exactly like the translucent text.
    pub fn flatten(self, background: Rgba) -> TextColors {
        TextColors {
            title: composite(self.title, background),
            body: composite(self.body, background),
        }
    }
}

/// Select title and body text colors for `background`.
///
/// See [`TextColorPolicy`] for how the two policies differ.
///
/// With [`TextColorPolicy::AlphaSearch`], white is tried first for both
/// thresholds, then black. When neither family satisfies both, each slot
/// takes whichever family satisfies it, preferring white; a slot no
/// family can satisfy falls back to opaque black.
///
/// # Errors
///
/// [`ContrastError::TranslucentBackground`] if `background.a != 255`.
///
/// # Example
/// ```
/// use swatch_core::{select_text_colors, ContrastOptions, Rgba, TextColorPolicy};
///
/// let colors = select_text_colors(
///     Rgba::opaque(250, 240, 200),
///     TextColorPolicy::BinaryChoice,
///     &ContrastOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(colors.title, Rgba::BLACK);
/// assert_eq!(colors.body, Rgba::BLACK);
/// ```
pub fn select_text_colors(
    background: Rgba,
    policy: TextColorPolicy,
    options: &ContrastOptions,
) -> Result<TextColors, ContrastError> {
    ensure_opaque(background)?;

    let colors = match policy {
        TextColorPolicy::AlphaSearch => alpha_search(background, options)?,
        TextColorPolicy::BinaryChoice => binary_choice(background)?,
    };

    tracing::debug!(
        %background,
        %policy,
        title = %colors.title,
        body = %colors.body,
        "Selected text colors"
    );

    Ok(colors)
}

fn alpha_search(background: Rgba, options: &ContrastOptions) -> Result<TextColors, ContrastError> {
    // Most swatches are dark, so white goes first
    let light_body = find_minimum_alpha(Rgba::WHITE, background, options.min_contrast_body, options)?;
    let light_title =
        find_minimum_alpha(Rgba::WHITE, background, options.min_contrast_title, options)?;

    if let (Some(body), Some(title)) = (light_body, light_title) {
        return Ok(TextColors {
            title: Rgba::WHITE.with_alpha(title),
            body: Rgba::WHITE.with_alpha(body),
        });
    }

    let dark_body = find_minimum_alpha(Rgba::BLACK, background, options.min_contrast_body, options)?;
    let dark_title =
        find_minimum_alpha(Rgba::BLACK, background, options.min_contrast_title, options)?;

    if let (Some(body), Some(title)) = (dark_body, dark_title) {
        return Ok(TextColors {
            title: Rgba::BLACK.with_alpha(title),
            body: Rgba::BLACK.with_alpha(body),
        });
    }

    tracing::debug!(%background, "No single family satisfies both thresholds, mixing");

    Ok(TextColors {
        title: pick_slot(light_title, dark_title),
        body: pick_slot(light_body, dark_body),
    })
}

fn pick_slot(light: Option<u8>, dark: Option<u8>) -> Rgba {
    match (light, dark) {
        (Some(alpha), _) => Rgba::WHITE.with_alpha(alpha),
        (None, Some(alpha)) => Rgba::BLACK.with_alpha(alpha),
        (None, None) => Rgba::BLACK,
    }
}

fn binary_choice(background: Rgba) -> Result<TextColors, ContrastError> {
    let white = calculate_contrast(Rgba::WHITE, background)?;
    let black = calculate_contrast(Rgba::BLACK, background)?;
    let color = if white > black {
        Rgba::WHITE
    } else {
        Rgba::BLACK
    };
    Ok(TextColors {
        title: color,
        body: color,
    })
}
