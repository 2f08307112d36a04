//! Error types for convolution and PSF/OTF operations.

use spektr_fourier::FourierError;
use thiserror::Error;

/// Result type alias using [`OpsError`] as the error type.
pub type OpsResult<T> = std::result::Result<T, OpsError>;

/// Errors raised by the filtering operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// A kernel matrix is non-square or has an even side length.
    ///
    /// Surfaced at construction time, before any filtering executes.
    #[error("invalid kernel: {rows}x{cols} ({reason})")]
    InvalidKernel {
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        cols: usize,
        /// Which rule was violated
        reason: String,
    },

    /// A filtering operation was invoked on a kernel whose matrix was never
    /// set. A usage error, never retried.
    #[error("kernel \"{name}\" has no matrix set")]
    MissingKernel {
        /// Name of the offending kernel
        name: String,
    },

    /// A kernel does not fit inside the target it is being applied to or
    /// embedded into.
    #[error("kernel side {side} exceeds available size {max}")]
    KernelTooLarge {
        /// Kernel side length
        side: usize,
        /// Largest side the operation can accommodate
        max: usize,
    },

    /// A spectrum handed to the PSF converter is not square.
    #[error("spectrum is not square: {rows}x{cols}")]
    NotSquare {
        /// Spectrum rows
        rows: usize,
        /// Spectrum columns
        cols: usize,
    },

    /// Buffer or matrix level failure from spektr-core.
    #[error(transparent)]
    Core(#[from] spektr_core::Error),

    /// Transform level failure from spektr-fourier.
    #[error(transparent)]
    Fourier(#[from] FourierError),
}

impl OpsError {
    /// Creates an [`OpsError::InvalidKernel`] error.
    #[inline]
    pub fn invalid_kernel(rows: usize, cols: usize, reason: impl Into<String>) -> Self {
        Self::InvalidKernel {
            rows,
            cols,
            reason: reason.into(),
        }
    }

    /// Creates an [`OpsError::MissingKernel`] error.
    #[inline]
    pub fn missing_kernel(name: impl Into<String>) -> Self {
        Self::MissingKernel { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_kernel_message() {
        let err = OpsError::invalid_kernel(3, 2, "matrix is not square");
        let msg = err.to_string();
        assert!(msg.contains("3x2"));
        assert!(msg.contains("not square"));
    }

    #[test]
    fn test_missing_kernel_message() {
        let err = OpsError::missing_kernel("Custom Filter");
        assert!(err.to_string().contains("Custom Filter"));
    }
}
