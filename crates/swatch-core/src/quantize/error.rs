//! Error type for palette quantization

/// Error type for [`quantize`](super::quantize).
///
/// A palette shorter than requested is not an error; see
/// [`Palette`](super::Palette).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantizeError {
    /// No colors were provided
    #[error("cannot quantize an empty color collection")]
    EmptyInput,

    /// Requested palette size is below 1
    #[error("invalid palette size {0} (must be at least 1)")]
    InvalidTargetSize(usize),
}
