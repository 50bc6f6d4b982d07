//! Error type for contrast queries

/// Error type for contrast calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContrastError {
    /// The background is not fully opaque
    #[error("background cannot be translucent (alpha {alpha}, expected 255)")]
    TranslucentBackground {
        /// Alpha of the rejected background
        alpha: u8,
    },
}
