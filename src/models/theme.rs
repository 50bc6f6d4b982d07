use serde::Serialize;
use swatch_core::{
    calculate_contrast, select_text_colors, ContrastOptions, Palette, QuantizeError, Rgba,
    SwatchError, TextColorPolicy,
};

/// Palette slot used for each theme field.
///
/// Five swatches are spread over the window states so that neighbouring
/// elements never share a color. Shorter palettes wrap around.
mod slots {
    pub const ACTIVE: (usize, usize) = (0, 1);
    pub const FOCUSED: (usize, usize) = (3, 4);
    pub const INACTIVE: (usize, usize) = (1, 2);
    pub const URGENT: (usize, usize) = (4, 0);
    pub const BACKGROUND: usize = 2;
    pub const SEPARATOR: usize = 3;
    pub const STATUSLINE: usize = 4;
}

/// Colors for one window/workspace state (`#rrggbb` strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateTheme {
    pub border: String,
    pub background: String,
    pub font: String,
}

/// A complete bar and window color theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: String,
    pub statusline: String,
    pub separator: String,
    pub focused: StateTheme,
    pub active: StateTheme,
    pub inactive: StateTheme,
    pub urgent: StateTheme,
}

impl Theme {
    /// Map a palette onto the theme slots.
    ///
    /// Each state's font is the title text color chosen for that state's
    /// background, flattened to an opaque color since i3 colors carry no
    /// alpha.
    pub fn from_palette(
        palette: &Palette,
        policy: TextColorPolicy,
        options: &ContrastOptions,
    ) -> Result<Self, SwatchError> {
        let slot = |index: usize| palette.cycled(index).ok_or(QuantizeError::EmptyInput);

        let state = |(bg, border): (usize, usize)| -> Result<StateTheme, SwatchError> {
            let background = slot(bg)?;
            let text = select_text_colors(background, policy, options)?.flatten(background);
            Ok(StateTheme {
                border: slot(border)?.to_hex(),
                background: background.to_hex(),
                font: text.title.to_hex(),
            })
        };

        let theme = Theme {
            background: slot(slots::BACKGROUND)?.to_hex(),
            statusline: slot(slots::STATUSLINE)?.to_hex(),
            separator: slot(slots::SEPARATOR)?.to_hex(),
            focused: state(slots::FOCUSED)?,
            active: state(slots::ACTIVE)?,
            inactive: state(slots::INACTIVE)?,
            urgent: state(slots::URGENT)?,
        };

        tracing::debug!(swatches = palette.len(), "Mapped palette onto theme");
        Ok(theme)
    }
}

/// One palette entry with the text colors chosen for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub color: String,
    pub title: String,
    pub body: String,
    pub title_contrast: f64,
    pub body_contrast: f64,
}

impl Swatch {
    pub fn new(
        color: Rgba,
        policy: TextColorPolicy,
        options: &ContrastOptions,
    ) -> Result<Self, SwatchError> {
        let text = select_text_colors(color, policy, options)?;
        Ok(Self {
            color: color.to_hex(),
            title: text.title.to_string(),
            body: text.body.to_string(),
            title_contrast: calculate_contrast(text.title, color)?,
            body_contrast: calculate_contrast(text.body, color)?,
        })
    }

    /// Swatches for every palette entry, in palette order
    pub fn for_palette(
        palette: &Palette,
        policy: TextColorPolicy,
        options: &ContrastOptions,
    ) -> Result<Vec<Self>, SwatchError> {
        palette
            .iter()
            .map(|&color| Self::new(color, policy, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_core::quantize;

    fn palette(colors: &[(u8, u8, u8)]) -> Palette {
        // Distinct colors and size == count keep each color as its own swatch
        quantize(colors.iter().map(|&c| Rgba::from(c)).collect(), colors.len()).unwrap()
    }

    #[test]
    fn test_single_color_palette_fills_every_slot() {
        let p = palette(&[(0, 0, 0)]);
        let theme =
            Theme::from_palette(&p, TextColorPolicy::BinaryChoice, &ContrastOptions::default())
                .unwrap();

        assert_eq!(theme.background, "#000000");
        assert_eq!(theme.statusline, "#000000");
        assert_eq!(
            theme.focused,
            StateTheme {
                border: "#000000".to_string(),
                background: "#000000".to_string(),
                font: "#ffffff".to_string(),
            }
        );
    }

    #[test]
    fn test_slot_assignment() {
        let p = palette(&[(250, 0, 0), (0, 0, 0), (0, 250, 0), (0, 0, 250), (250, 250, 250)]);
        let hex = p.to_hex_strings();
        let theme =
            Theme::from_palette(&p, TextColorPolicy::BinaryChoice, &ContrastOptions::default())
                .unwrap();

        assert_eq!(theme.active.background, hex[0]);
        assert_eq!(theme.active.border, hex[1]);
        assert_eq!(theme.inactive.background, hex[1]);
        assert_eq!(theme.inactive.border, hex[2]);
        assert_eq!(theme.focused.background, hex[3]);
        assert_eq!(theme.focused.border, hex[4]);
        assert_eq!(theme.urgent.background, hex[4]);
        assert_eq!(theme.urgent.border, hex[0]);
        assert_eq!(theme.background, hex[2]);
        assert_eq!(theme.separator, hex[3]);
        assert_eq!(theme.statusline, hex[4]);
    }

    #[test]
    fn test_fonts_are_readable() {
        let p = palette(&[(20, 20, 60), (240, 230, 200), (128, 128, 128)]);
        let theme =
            Theme::from_palette(&p, TextColorPolicy::AlphaSearch, &ContrastOptions::default())
                .unwrap();

        for state in [&theme.focused, &theme.active, &theme.inactive, &theme.urgent] {
            let bg: Rgba = state.background.parse().unwrap();
            let font: Rgba = state.font.parse().unwrap();
            let ratio = calculate_contrast(font, bg).unwrap();
            assert!(ratio >= 4.5, "{} on {}: {ratio}", state.font, state.background);
        }
    }

    #[test]
    fn test_swatch_reports_contrast() {
        let swatch = Swatch::new(
            Rgba::BLACK,
            TextColorPolicy::AlphaSearch,
            &ContrastOptions::default(),
        )
        .unwrap();
        assert_eq!(swatch.color, "#000000");
        assert_eq!(swatch.title, "#ffffff77");
        assert!(swatch.title_contrast >= 4.5);
        assert!(swatch.body_contrast >= 3.0);
    }

    #[test]
    fn test_swatches_follow_palette_order() {
        let p = palette(&[(10, 10, 10), (200, 200, 200)]);
        let swatches =
            Swatch::for_palette(&p, TextColorPolicy::BinaryChoice, &ContrastOptions::default())
                .unwrap();
        let colors: Vec<&str> = swatches.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, p.to_hex_strings());
    }
}
