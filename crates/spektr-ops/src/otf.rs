//! PSF/OTF conversion.
//!
//! A convolution kernel is a point spread function (PSF) centered on its
//! middle element. Its optical transfer function (OTF) is the Fourier
//! transform of the PSF with the center relocated to the (0, 0) corner, so
//! that the zero-frequency bin carries the kernel's DC gain. The relocation
//! is a cyclic quadrant shift; [`otf2psf`] applies the complementary shift
//! after the inverse transform, making the pair exact inverses.
//!
//! Transforms go through the O(N²) reference engine in
//! [`spektr_fourier::dft`]: kernel sides are small and odd, which the
//! radix-2 engine cannot represent without padding.

use crate::error::{OpsError, OpsResult};
use crate::kernel::Kernel;
use spektr_core::ComplexMatrix;
use spektr_fourier::dft;
use tracing::trace;

/// Transforms a kernel into its OTF, same size as the kernel.
pub fn psf2otf(kernel: &Kernel) -> OpsResult<ComplexMatrix> {
    let psf = kernel.to_complex()?;
    let side = psf.rows();
    let half = (side - 1) / 2;
    trace!(kernel = kernel.name(), side, "psf2otf");
    Ok(dft::transform_2d(&cyclic_shift(&psf, half)))
}

/// Transforms a kernel into an OTF of side `new_size`.
///
/// The kernel is embedded in a `new_size` x `new_size` zero matrix with its
/// quadrants wrapped into the corners, then transformed. Returns
/// [`OpsError::KernelTooLarge`] when the kernel does not fit.
pub fn psf2otf_sized(kernel: &Kernel, new_size: usize) -> OpsResult<ComplexMatrix> {
    let side = kernel.side()?;
    if new_size < side {
        return Err(OpsError::KernelTooLarge {
            side,
            max: new_size,
        });
    }
    let half = (side - 1) / 2;
    trace!(kernel = kernel.name(), side, new_size, "psf2otf_sized");

    // top-left embedding, then the same wrap that centers the kernel on (0, 0)
    let embedded = kernel.zero_extended(new_size)?.to_complex();
    Ok(dft::transform_2d(&cyclic_shift(&embedded, half)))
}

/// Recovers the kernel behind an OTF.
///
/// Inverse of [`psf2otf`] for a same-size OTF: inverse transform, then the
/// complementary quadrant shift. The result carries factor 1 and bias 0; its
/// coefficients are the real parts of the inverse transform.
pub fn otf2psf(otf: &ComplexMatrix) -> OpsResult<Kernel> {
    if !otf.is_square() {
        return Err(OpsError::NotSquare {
            rows: otf.rows(),
            cols: otf.cols(),
        });
    }
    let side = otf.rows();
    let half = (side - 1) / 2;
    let ost = side - half;
    trace!(side, "otf2psf");

    let psf = cyclic_shift(&dft::inverse_2d(otf), ost);
    Kernel::new("Recovery Filter", psf.re(), 1.0, 0.0)
}

/// Cyclically shifts rows and columns forward by `shift`:
/// `out[r][c] = m[(r + shift) % side][(c + shift) % side]`.
///
/// Two shifts summing to `side` compose to the identity.
fn cyclic_shift(m: &ComplexMatrix, shift: usize) -> ComplexMatrix {
    let side = m.rows();
    let mut out = ComplexMatrix::zeros(side, side);
    for r in 0..side {
        for c in 0..side {
            out[(r, c)] = m[((r + shift) % side, (c + shift) % side)];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use spektr_core::RealMatrix;

    #[test]
    fn test_cyclic_shift_composes_to_identity() {
        let m = RealMatrix::from_vec(3, 3, (1..=9).map(f64::from).collect())
            .unwrap()
            .to_complex();
        let shifted = cyclic_shift(&cyclic_shift(&m, 1), 2);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(shifted[(r, c)], m[(r, c)]);
            }
        }
    }

    #[test]
    fn test_copy_kernel_gives_flat_otf() {
        // the identity PSF centers a single 1; its OTF is all-ones
        let otf = psf2otf(&presets::copy()).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                assert_abs_diff_eq!(otf[(r, c)].re, 1.0, epsilon = 1e-9);
                assert_abs_diff_eq!(otf[(r, c)].im, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_dc_bin_is_kernel_sum() {
        let kernel = presets::gaussian3x3();
        let otf = psf2otf(&kernel).unwrap();
        let sum: f64 = kernel.normalized().unwrap().as_slice().iter().sum();
        assert_abs_diff_eq!(otf[(0, 0)].re, sum, epsilon = 1e-9);
    }

    #[test]
    fn test_round_trip_recovers_kernel() {
        let kernel = presets::sharpen();
        let otf = psf2otf(&kernel).unwrap();
        let back = otf2psf(&otf).unwrap();
        assert_eq!(back.name(), "Recovery Filter");
        let original = kernel.normalized().unwrap();
        let recovered = back.matrix().unwrap();
        for r in 0..3 {
            for c in 0..3 {
                assert_abs_diff_eq!(recovered[(r, c)], original[(r, c)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip_5x5() {
        let kernel = presets::gaussian5x5();
        let back = otf2psf(&psf2otf(&kernel).unwrap()).unwrap();
        let original = kernel.normalized().unwrap();
        let recovered = back.matrix().unwrap();
        for r in 0..5 {
            for c in 0..5 {
                assert_abs_diff_eq!(recovered[(r, c)], original[(r, c)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_sized_otf_keeps_dc_gain() {
        let kernel = presets::gaussian3x3();
        let otf = psf2otf_sized(&kernel, 8).unwrap();
        assert_eq!(otf.rows(), 8);
        let sum: f64 = kernel.normalized().unwrap().as_slice().iter().sum();
        assert_abs_diff_eq!(otf[(0, 0)].re, sum, epsilon = 1e-9);
    }

    #[test]
    fn test_sized_otf_rejects_small_target() {
        let err = psf2otf_sized(&presets::gaussian5x5(), 3).unwrap_err();
        assert!(matches!(err, OpsError::KernelTooLarge { side: 5, max: 3 }));
    }

    #[test]
    fn test_otf2psf_rejects_rectangular() {
        let m = ComplexMatrix::zeros(3, 5);
        assert!(matches!(
            otf2psf(&m),
            Err(OpsError::NotSquare { rows: 3, cols: 5 })
        ));
    }

    #[test]
    fn test_unset_kernel_rejected() {
        let k = Kernel::unset("empty");
        assert!(matches!(psf2otf(&k), Err(OpsError::MissingKernel { .. })));
    }

    #[test]
    fn test_copy_otf_inverts_to_copy() {
        let otf = psf2otf(&presets::copy()).unwrap();
        let back = otf2psf(&otf).unwrap();
        let m = back.matrix().unwrap();
        assert_abs_diff_eq!(m[(1, 1)], 1.0, epsilon = 1e-9);
        let off_center: f64 = m
            .as_slice()
            .iter()
            .map(|v| v.abs())
            .sum::<f64>()
            - m[(1, 1)].abs();
        assert_abs_diff_eq!(off_center, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_otf_is_delta_psf() {
        let flat = ComplexMatrix::from_vec(3, 3, vec![Complex64::new(1.0, 0.0); 9]).unwrap();
        let k = otf2psf(&flat).unwrap();
        let m = k.matrix().unwrap();
        assert_abs_diff_eq!(m[(1, 1)], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m[(0, 0)], 0.0, epsilon = 1e-9);
    }
}
