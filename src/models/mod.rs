pub mod config;
pub mod theme;

pub use config::{AppConfig, PaletteConfig, TextConfig, ThemeConfig};
pub use theme::{StateTheme, Swatch, Theme};
