//! 8-bit RGBA color type

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::luminance::relative_luminance;

/// An 8-bit-per-channel color with straight alpha.
///
/// `Rgba` is a plain `Copy` value: every transformation returns a new
/// color and never mutates the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    ///
    /// # Example
    /// ```
    /// use swatch_core::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Create a color from a byte array [R, G, B, A].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Return a copy of this color with the alpha channel replaced.
    ///
    /// # Example
    /// ```
    /// use swatch_core::Rgba;
    /// let ghost = Rgba::WHITE.with_alpha(64);
    /// assert_eq!(ghost, Rgba::new(255, 255, 255, 64));
    /// assert_eq!(Rgba::WHITE.a, 255);
    /// ```
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the alpha channel is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// WCAG relative luminance of the color channels (alpha is ignored).
    #[inline]
    pub fn luminance(self) -> f64 {
        relative_luminance(self)
    }

    /// Format as `#rrggbb`, dropping alpha.
    ///
    /// # Example
    /// ```
    /// use swatch_core::Rgba;
    /// assert_eq!(Rgba::opaque(0x12, 0xAB, 0x0F).to_hex(), "#12ab0f");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex_with_alpha(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(bytes: [u8; 3]) -> Self {
        Self::opaque(bytes[0], bytes[1], bytes[2])
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::opaque(r, g, b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_hex_with_alpha())
        }
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`, each with or without
    /// the leading hash. The short and 6-digit forms are opaque. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_core::Rgba;
    ///
    /// let white: Rgba = "#FFF".parse().unwrap();
    /// assert_eq!(white, Rgba::WHITE);
    ///
    /// let glass: Rgba = "ffffff80".parse().unwrap();
    /// assert_eq!(glass.a, 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // Every character must be a hex digit; sign prefixes are not
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidHex(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let byte = |i: usize| (digits[i] << 4) | digits[i + 1];

        match digits.len() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            3 => Ok(Self::opaque(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::opaque(byte(0), byte(2), byte(4))),
            8 => Ok(Self::new(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
