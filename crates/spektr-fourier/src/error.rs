//! Error types for the transform engines.
//!
//! The reference implementation signalled a bad inverse-FFT length by
//! returning an absent result and left spectrum/crop mismatches unchecked.
//! Both are typed errors here so callers cannot silently drop them.

use thiserror::Error;

/// Result type alias using [`FourierError`] as the error type.
pub type FourierResult<T> = std::result::Result<T, FourierError>;

/// Errors raised by the FFT engine.
///
/// The reference DFT path accepts arbitrary lengths and cannot fail.
#[derive(Debug, Error)]
pub enum FourierError {
    /// An inverse FFT was asked to undo a spectrum whose length is not a
    /// power of two, which the radix-2 recursion cannot have produced.
    #[error("length {len} is not a power of two")]
    NonPowerOfTwo {
        /// Offending length
        len: usize,
    },

    /// A 2D inverse was handed a non-square spectrum.
    #[error("spectrum is not square: {rows}x{cols}")]
    NotSquare {
        /// Spectrum rows
        rows: usize,
        /// Spectrum columns
        cols: usize,
    },

    /// A 1D truncation target exceeds the transform length.
    #[error("truncation target {target} exceeds transform length {len}")]
    TargetExceedsLength {
        /// Transform length
        len: usize,
        /// Requested output length
        target: usize,
    },

    /// A 2D crop target exceeds the spectrum side.
    #[error("crop {target_rows}x{target_cols} exceeds spectrum side {side}")]
    DimensionMismatch {
        /// Square spectrum side length
        side: usize,
        /// Requested output rows
        target_rows: usize,
        /// Requested output columns
        target_cols: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_sizes() {
        let err = FourierError::NonPowerOfTwo { len: 12 };
        assert!(err.to_string().contains("12"));

        let err = FourierError::DimensionMismatch {
            side: 8,
            target_rows: 9,
            target_cols: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("9x4"));
        assert!(msg.contains('8'));
    }
}
