//! Swatchbar - window manager themes from wallpapers
//!
//! Extracts a palette from a PNG with median cut, picks readable text
//! colors for every swatch, and renders an i3 color theme.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
