//! Immutable quantizer output.

use std::ops::Index;

use crate::color::Rgba;

/// An ordered palette of opaque colors produced by [`quantize`](super::quantize).
///
/// The palette may be shorter than the requested size when the input ran
/// out of splittable boxes; consumers must not assume a fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    pub(crate) fn new(colors: Vec<Rgba>) -> Self {
        Self { colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rgba] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> {
        self.colors.iter()
    }

    pub fn get(&self, index: usize) -> Option<Rgba> {
        self.colors.get(index).copied()
    }

    /// Color at `index` modulo the palette length.
    ///
    /// Lets consumers that need a fixed number of slots reuse entries of a
    /// short palette. Returns `None` only for an empty palette.
    ///
    /// # Example
    /// ```
    /// use swatch_core::{quantize, Rgba};
    ///
    /// let palette = quantize(vec![Rgba::BLACK, Rgba::WHITE], 2).unwrap();
    /// assert_eq!(palette.cycled(2), palette.get(0));
    /// ```
    pub fn cycled(&self, index: usize) -> Option<Rgba> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors[index % self.colors.len()])
        }
    }

    /// `#rrggbb` strings in palette order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    pub fn into_vec(self) -> Vec<Rgba> {
        self.colors
    }
}

impl Index<usize> for Palette {
    type Output = Rgba;

    fn index(&self, index: usize) -> &Rgba {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl IntoIterator for Palette {
    type Item = Rgba;
    type IntoIter = std::vec::IntoIter<Rgba>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}
