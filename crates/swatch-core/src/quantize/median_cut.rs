//! Median-cut subdivision driver.

use super::color_box::ColorBox;
use super::error::QuantizeError;
use super::palette::Palette;
use crate::color::Rgba;

/// Reduce `colors` to at most `target_size` representative colors.
///
/// Starting from one box holding every color, the most populous box is
/// repeatedly split at the median of its dominant channel until there are
/// `target_size` boxes. Equal populations are resolved in favour of the
/// box created first. Each final box contributes its truncated mean color,
/// always fully opaque.
///
/// Subdivision stops early, returning a shorter palette, once every box
/// holds a single color.
///
/// Output order is box creation order: the initial box first, then each
/// split-off box in the order it was cut.
///
/// # Errors
///
/// - [`QuantizeError::InvalidTargetSize`] if `target_size` is 0
/// - [`QuantizeError::EmptyInput`] if `colors` is empty
///
/// # Example
///
/// ```
/// use swatch_core::{quantize, Rgba};
///
/// let pixels: Vec<Rgba> = (0..100u8).map(|i| Rgba::opaque(i * 2, 0, 255 - i)).collect();
/// let palette = quantize(pixels, 4).unwrap();
/// assert_eq!(palette.len(), 4);
/// ```
pub fn quantize(colors: Vec<Rgba>, target_size: usize) -> Result<Palette, QuantizeError> {
    let boxes = subdivide(colors, target_size)?;
    let palette: Vec<Rgba> = boxes.iter().map(ColorBox::average).collect();

    if palette.len() < target_size {
        tracing::debug!(
            requested = target_size,
            produced = palette.len(),
            "Ran out of splittable boxes, returning short palette"
        );
    } else {
        tracing::debug!(colors = palette.len(), "Median cut complete");
    }

    Ok(Palette::new(palette))
}

/// Run the box subdivision and return the final boxes in creation order.
pub(crate) fn subdivide(
    colors: Vec<Rgba>,
    target_size: usize,
) -> Result<Vec<ColorBox>, QuantizeError> {
    if target_size < 1 {
        return Err(QuantizeError::InvalidTargetSize(target_size));
    }
    let initial = ColorBox::new(colors, 0).ok_or(QuantizeError::EmptyInput)?;

    let mut boxes = Vec::with_capacity(target_size);
    boxes.push(initial);

    for _ in 1..target_size {
        let Some(index) = largest_box(&boxes) else {
            break;
        };
        let created = boxes.len();
        match boxes[index].split(created) {
            Some(split_off) => boxes.push(split_off),
            None => break,
        }
    }

    Ok(boxes)
}

/// Index of the most populous splittable box, oldest first on ties.
///
/// The arena only grows by appending, so index order is creation order.
fn largest_box(boxes: &[ColorBox]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, b) in boxes.iter().enumerate() {
        if !b.is_splittable() {
            continue;
        }
        match best {
            Some(j) if boxes[j].population() >= b.population() => {}
            _ => best = Some(i),
        }
    }
    best
}
