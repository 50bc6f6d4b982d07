//! Error type for hex color parsing

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    #[error("invalid hex color length (expected 3, 6 or 8 characters)")]
    InvalidLength,

    /// Character that is not a hex digit
    #[error("invalid hex character: {0:?}")]
    InvalidHex(char),
}
