//! Convolution kernels.
//!
//! A [`Kernel`] is an immutable value object: a square odd-sized coefficient
//! matrix plus a multiplicative `factor` and an additive `bias` (applied
//! after filtering, e.g. to center emboss output at 128). Validation happens
//! once, at construction — a kernel that exists is a kernel that filters.
//!
//! A kernel may also be created without a matrix ([`Kernel::unset`]); any
//! attempt to filter with it fails with a missing-kernel error rather than
//! panicking mid-pipeline.
//!
//! # Example
//!
//! ```rust
//! use spektr_core::RealMatrix;
//! use spektr_ops::Kernel;
//!
//! let m = RealMatrix::from_vec(3, 3, vec![
//!     -1.0, -1.0, -1.0,
//!     -1.0,  9.0, -1.0,
//!     -1.0, -1.0, -1.0,
//! ]).unwrap();
//! let sharpen = Kernel::new("Sharpen", m, 1.0, 0.0).unwrap();
//! assert_eq!(sharpen.side().unwrap(), 3);
//! ```

use crate::error::{OpsError, OpsResult};
use num_complex::Complex64;
use spektr_core::{ComplexMatrix, RealMatrix};

/// A named convolution kernel with normalization factor and output bias.
#[derive(Debug, Clone)]
pub struct Kernel {
    name: String,
    factor: f64,
    bias: f64,
    matrix: Option<RealMatrix>,
}

impl Kernel {
    /// Creates a validated kernel.
    ///
    /// The matrix must be square with an odd side length; anything else is
    /// an [`OpsError::InvalidKernel`] error. A constructed kernel cannot be
    /// mutated into an invalid state.
    pub fn new(
        name: impl Into<String>,
        matrix: RealMatrix,
        factor: f64,
        bias: f64,
    ) -> OpsResult<Self> {
        if !matrix.is_square() {
            return Err(OpsError::invalid_kernel(
                matrix.rows(),
                matrix.cols(),
                "matrix is not square",
            ));
        }
        if matrix.rows() % 2 == 0 {
            return Err(OpsError::invalid_kernel(
                matrix.rows(),
                matrix.cols(),
                "side length is even",
            ));
        }
        Ok(Self {
            name: name.into(),
            factor,
            bias,
            matrix: Some(matrix),
        })
    }

    /// Creates a kernel with no matrix.
    ///
    /// Filtering with it fails with [`OpsError::MissingKernel`].
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factor: 1.0,
            bias: 0.0,
            matrix: None,
        }
    }

    /// Kernel name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Multiplicative normalization factor.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Additive offset applied after filtering.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The coefficient matrix, or [`OpsError::MissingKernel`] when unset.
    pub fn matrix(&self) -> OpsResult<&RealMatrix> {
        self.matrix
            .as_ref()
            .ok_or_else(|| OpsError::missing_kernel(&self.name))
    }

    /// Side length of the square matrix.
    pub fn side(&self) -> OpsResult<usize> {
        Ok(self.matrix()?.rows())
    }

    /// Margin between the kernel center and its edge, `(side - 1) / 2`.
    pub fn offset(&self) -> OpsResult<usize> {
        Ok((self.side()? - 1) / 2)
    }

    /// The matrix with `factor` folded into every coefficient.
    pub fn normalized(&self) -> OpsResult<RealMatrix> {
        let factor = self.factor;
        Ok(self.matrix()?.map(|v| v * factor))
    }

    /// The normalized matrix as complex values.
    pub fn to_complex(&self) -> OpsResult<ComplexMatrix> {
        let factor = self.factor;
        Ok(self.matrix()?.map(|v| Complex64::new(v * factor, 0.0)))
    }

    /// The normalized matrix placed in the top-left corner of a
    /// `new_size` x `new_size` zero matrix.
    ///
    /// Used to match a kernel to the square size an FFT chose for the image.
    pub fn zero_extended(&self, new_size: usize) -> OpsResult<RealMatrix> {
        let normalized = self.normalized()?;
        let side = normalized.rows();
        if new_size < side {
            return Err(OpsError::KernelTooLarge {
                side,
                max: new_size,
            });
        }
        let mut out = RealMatrix::zeros(new_size, new_size);
        for r in 0..side {
            out.row_mut(r)[..side].copy_from_slice(normalized.row(r));
        }
        Ok(out)
    }

    /// Crate-internal constructor for the preset catalog, whose matrices
    /// are statically known to be square and odd.
    pub(crate) fn preset(name: &str, matrix: RealMatrix, factor: f64, bias: f64) -> Self {
        debug_assert!(matrix.is_square() && matrix.rows() % 2 == 1);
        Self {
            name: name.to_owned(),
            factor,
            bias,
            matrix: Some(matrix),
        }
    }
}
