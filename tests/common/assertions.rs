//! Assertion helpers for tests.

use swatch_core::{calculate_contrast, Rgba};

/// Parse a color string, failing the test with context
pub fn color(hex: &str) -> Rgba {
    hex.parse()
        .unwrap_or_else(|e| panic!("invalid color {hex:?}: {e}"))
}

/// Assert `fg` on `bg` reaches at least `min` contrast
pub fn assert_readable(fg: &str, bg: &str, min: f64) {
    let ratio = calculate_contrast(color(fg), color(bg)).expect("opaque background");
    assert!(
        ratio >= min,
        "{fg} on {bg} has contrast {ratio:.3}, expected at least {min}"
    );
}

/// Assert a string is a lowercase `#rrggbb` color
pub fn assert_opaque_hex(value: &str) {
    assert!(
        value.len() == 7
            && value.starts_with('#')
            && value[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected #rrggbb, got {value:?}"
    );
}
