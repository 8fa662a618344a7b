use core::fmt;

/// Error returned by buffer operations.
///
/// Every operation validates its arguments before touching a single byte,
/// so a returned error always leaves the buffer in its prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A scalar parameter is malformed or out of range
    /// (zero fade factor, zero allocation dimension, oversized shift).
    InvalidArgument,
    /// An index or range lies outside the buffer extent.
    OutOfBounds,
    /// Two buffers disagree on `channels_per_led` (or `led_count`
    /// where equality is required, as in `mix`).
    ShapeMismatch,
    /// A write would exceed the buffer capacity.
    Overflow,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidArgument => "invalid argument",
            Self::OutOfBounds => "index out of range",
            Self::ShapeMismatch => "buffer shapes differ",
            Self::Overflow => "write exceeds buffer capacity",
        };
        f.write_str(text)
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, BufferError>;
