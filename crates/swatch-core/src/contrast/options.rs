//! Contrast targets, search tuning and text color policy.

use std::fmt;
use std::str::FromStr;

/// WCAG AA minimum for large text
pub const DEFAULT_MIN_CONTRAST_BODY: f64 = 3.0;
/// WCAG AA minimum for normal text
pub const DEFAULT_MIN_CONTRAST_TITLE: f64 = 4.5;
pub const DEFAULT_MAX_SEARCH_ITERATIONS: u32 = 10;
pub const DEFAULT_SEARCH_PRECISION: u8 = 10;

/// Thresholds and binary-search parameters for text color selection.
///
/// Defaults match WCAG AA guidance: 3.0 for body text, 4.5 for titles,
/// at most 10 search probes, stopping once the alpha window is 10 wide.
///
/// # Example
///
/// ```
/// use swatch_core::ContrastOptions;
///
/// let strict = ContrastOptions::default()
///     .min_contrast_title(7.0)
///     .search_precision(1);
/// assert_eq!(strict.min_contrast_body, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOptions {
    /// Minimum contrast ratio for body text
    pub min_contrast_body: f64,
    /// Minimum contrast ratio for title text
    pub min_contrast_title: f64,
    /// Maximum number of binary-search probes beyond the first
    pub max_search_iterations: u32,
    /// Search stops once `max_alpha - min_alpha` is at most this
    pub search_precision: u8,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self {
            min_contrast_body: DEFAULT_MIN_CONTRAST_BODY,
            min_contrast_title: DEFAULT_MIN_CONTRAST_TITLE,
            max_search_iterations: DEFAULT_MAX_SEARCH_ITERATIONS,
            search_precision: DEFAULT_SEARCH_PRECISION,
        }
    }
}

impl ContrastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn min_contrast_body(mut self, ratio: f64) -> Self {
        self.min_contrast_body = ratio;
        self
    }

    #[inline]
    pub fn min_contrast_title(mut self, ratio: f64) -> Self {
        self.min_contrast_title = ratio;
        self
    }

    #[inline]
    pub fn max_search_iterations(mut self, iterations: u32) -> Self {
        self.max_search_iterations = iterations;
        self
    }

    #[inline]
    pub fn search_precision(mut self, precision: u8) -> Self {
        self.search_precision = precision;
        self
    }
}

/// How text colors are chosen for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColorPolicy {
    /// Search the lowest sufficient alpha for white, then black, per slot.
    ///
    /// Title and body may end up in different color families when only
    /// one family can satisfy each threshold.
    #[default]
    AlphaSearch,

    /// Opaque white or opaque black, whichever contrasts more, for both
    /// title and body.
    BinaryChoice,
}

impl TextColorPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TextColorPolicy::AlphaSearch => "alpha-search",
            TextColorPolicy::BinaryChoice => "binary-choice",
        }
    }
}

impl fmt::Display for TextColorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown text color policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown text color policy '{0}' (expected alpha-search or binary-choice)")]
pub struct ParsePolicyError(pub String);

impl FromStr for TextColorPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha-search" | "alpha_search" => Ok(TextColorPolicy::AlphaSearch),
            "binary-choice" | "binary_choice" => Ok(TextColorPolicy::BinaryChoice),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
