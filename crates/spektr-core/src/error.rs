//! Error types for spektr-core operations.
//!
//! Buffer construction, matrix construction and every conversion that can be
//! handed inconsistent geometry reports through the [`Error`] enum here.
//! Dimension problems are surfaced as typed errors at the call site instead
//! of producing an absent or truncated result.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building buffers and matrices or converting
/// between them.
#[derive(Debug, Error)]
pub enum Error {
    /// A data slice does not match the geometry it was declared with.
    #[error("size mismatch: expected {expected} elements, got {got}")]
    SizeMismatch {
        /// Element count implied by the declared geometry
        expected: usize,
        /// Element count actually supplied
        got: usize,
    },

    /// Row stride is too small for the given width and pixel size.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Provided stride in bytes
        stride: usize,
        /// Minimum required stride in bytes
        min_stride: usize,
        /// Image width in pixels
        width: usize,
    },

    /// Width or height is unusable for the requested operation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Two matrices that must agree in shape do not.
    #[error("dimension mismatch: {a_rows}x{a_cols} vs {b_rows}x{b_cols}")]
    DimensionMismatch {
        /// First matrix rows
        a_rows: usize,
        /// First matrix columns
        a_cols: usize,
        /// Second matrix rows
        b_rows: usize,
        /// Second matrix columns
        b_cols: usize,
    },

    /// Mirror margin does not fit inside the source image.
    #[error("mirror margin {margin} does not fit inside {width}x{height}")]
    MarginTooLarge {
        /// Requested margin in pixels
        margin: usize,
        /// Source width
        width: usize,
        /// Source height
        height: usize,
    },

    /// Pixel layout is not supported by the operation.
    #[error("unsupported pixel layout: {bytes_per_pixel} bytes/pixel ({expected})")]
    UnsupportedLayout {
        /// Bytes per pixel of the buffer that was passed in
        bytes_per_pixel: usize,
        /// What the operation needed
        expected: String,
    },
}

impl Error {
    /// Creates a [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, got: usize) -> Self {
        Self::SizeMismatch { expected, got }
    }

    /// Creates a [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates a [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_rows: a.0,
            a_cols: a.1,
            b_rows: b.0,
            b_cols: b.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = Error::size_mismatch(64, 60);
        let msg = err.to_string();
        assert!(msg.contains("64"));
        assert!(msg.contains("60"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = Error::dimension_mismatch((3, 3), (4, 5));
        let msg = err.to_string();
        assert!(msg.contains("3x3"));
        assert!(msg.contains("4x5"));
    }
}
