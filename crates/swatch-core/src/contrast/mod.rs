//! Contrast-aware text color selection
//!
//! Measures WCAG 2.0 contrast ratios and picks title/body text colors
//! that stay readable on a given opaque background, optionally lowering
//! the text opacity as far as the contrast target allows.

mod alpha_search;
mod error;
mod options;
mod ratio;
mod text_colors;

pub use alpha_search::find_minimum_alpha;
pub use error::ContrastError;
pub use options::{ContrastOptions, ParsePolicyError, TextColorPolicy};
pub use ratio::{calculate_contrast, ensure_opaque};
pub use text_colors::{select_text_colors, TextColors};
