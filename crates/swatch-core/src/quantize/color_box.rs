//! A box of colors: the unit of work in median-cut subdivision.

use crate::color::Rgba;

/// Channel a box is sorted and cut along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Red,
    Green,
    Blue,
}

impl Axis {
    /// Select the sort axis from per-channel ranges `(r, g, b)`.
    ///
    /// Red wins only when its range strictly dominates. The second branch
    /// tests whether the *blue* range strictly dominates and, if so, sorts
    /// by *green*. Everything else, including every tie, sorts by blue.
    /// Published palettes depend on this exact mapping, so it must not be
    /// "corrected" to the obvious blue-for-blue form.
    pub fn select(ranges: (u8, u8, u8)) -> Self {
        let (r, g, b) = ranges;
        if r > g && r > b {
            Axis::Red
        } else if b > g && b > r {
            Axis::Green
        } else {
            Axis::Blue
        }
    }

    #[inline]
    fn key(self, color: &Rgba) -> u8 {
        match self {
            Axis::Red => color.r,
            Axis::Green => color.g,
            Axis::Blue => color.b,
        }
    }
}

/// Per-channel minimum and maximum over a box's colors (alpha ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: [u8; 3],
    pub max: [u8; 3],
}

/// An owned, non-empty collection of colors.
///
/// `created` records the order in which boxes came into existence and is
/// used to break population ties in favour of the older box.
#[derive(Debug, Clone)]
pub struct ColorBox {
    colors: Vec<Rgba>,
    created: usize,
}

impl ColorBox {
    /// Wrap a color collection. Returns `None` for an empty collection.
    pub fn new(colors: Vec<Rgba>, created: usize) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors, created })
        }
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn created(&self) -> usize {
        self.created
    }

    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// A box can be split when both halves would be non-empty.
    #[inline]
    pub fn is_splittable(&self) -> bool {
        self.colors.len() >= 2
    }

    pub fn bounds(&self) -> Bounds {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for c in &self.colors {
            for (i, v) in [c.r, c.g, c.b].into_iter().enumerate() {
                min[i] = min[i].min(v);
                max[i] = max[i].max(v);
            }
        }
        Bounds { min, max }
    }

    /// Range (max - min) of each of R, G and B.
    pub fn ranges(&self) -> (u8, u8, u8) {
        let Bounds { min, max } = self.bounds();
        (max[0] - min[0], max[1] - min[1], max[2] - min[2])
    }

    pub fn split_axis(&self) -> Axis {
        Axis::select(self.ranges())
    }

    /// Split at the median of the selected axis.
    ///
    /// Colors are stably sorted by the axis channel. The lower
    /// `population / 2` colors move into the returned box (tagged with
    /// `created`); this box keeps the upper half. Returns `None`, leaving
    /// the box untouched, when the box holds a single color.
    pub fn split(&mut self, created: usize) -> Option<ColorBox> {
        if !self.is_splittable() {
            return None;
        }

        let axis = self.split_axis();
        self.colors.sort_by_key(|c| axis.key(c));

        let mid = self.colors.len() / 2;
        let upper = self.colors.split_off(mid);
        let lower = std::mem::replace(&mut self.colors, upper);

        tracing::trace!(
            ?axis,
            lower = lower.len(),
            upper = self.colors.len(),
            "Split color box"
        );

        Some(ColorBox {
            colors: lower,
            created,
        })
    }

    /// Truncated arithmetic mean of R, G and B; alpha is always 255.
    pub fn average(&self) -> Rgba {
        let n = self.colors.len() as u64;
        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for c in &self.colors {
            r += u64::from(c.r);
            g += u64::from(c.g);
            b += u64::from(c.b);
        }
        Rgba::opaque((r / n) as u8, (g / n) as u8, (b / n) as u8)
    }
}
