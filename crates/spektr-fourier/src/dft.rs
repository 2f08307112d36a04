//! Reference discrete Fourier transform, O(N²).
//!
//! The direct summation serves two roles: it is the correctness oracle for
//! the recursive engine in [`crate::fft`], and it is the transform of choice
//! for small arbitrary-sized inputs (the PSF/OTF converter uses it, since
//! kernel sides are small and odd). For anything image-sized, callers should
//! prefer the FFT path — the quadratic cost is a performance hazard, not a
//! correctness one.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use spektr_fourier::dft;
//!
//! let x: Vec<Complex64> = [1.0, 1.0, 1.0, 1.0]
//!     .iter()
//!     .map(|&v| Complex64::new(v, 0.0))
//!     .collect();
//! let spectrum = dft::transform(&x);
//! assert!((spectrum[0].re - 4.0).abs() < 1e-12);
//! ```

use num_complex::Complex64;
use spektr_core::ComplexMatrix;
use std::f64::consts::PI;

/// Forward transform: `X[k] = sum_n x[n] * e^(-2*pi*i*k*n/N)`.
pub fn transform(source: &[Complex64]) -> Vec<Complex64> {
    let n = source.len();
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let mut value = Complex64::new(0.0, 0.0);
        for (i, x) in source.iter().enumerate() {
            let phi = -2.0 * PI * (k as f64) * (i as f64) / n as f64;
            value += x * Complex64::from_polar(1.0, phi);
        }
        out.push(value);
    }
    out
}

/// Inverse transform: `x[n] = (1/N) * sum_k X[k] * e^(+2*pi*i*k*n/N)`.
pub fn inverse(source: &[Complex64]) -> Vec<Complex64> {
    let n = source.len();
    let scale = 1.0 / n as f64;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let mut value = Complex64::new(0.0, 0.0);
        for (k, x) in source.iter().enumerate() {
            let phi = 2.0 * PI * (k as f64) * (i as f64) / n as f64;
            value += x * Complex64::from_polar(1.0, phi);
        }
        out.push(value * scale);
    }
    out
}

/// Separable 2D forward transform: every row, then every column of the
/// row-transformed result.
pub fn transform_2d(source: &ComplexMatrix) -> ComplexMatrix {
    let mut out = source.clone();
    for r in 0..out.rows() {
        let transformed = transform(out.row(r));
        out.row_mut(r).copy_from_slice(&transformed);
    }
    for c in 0..out.cols() {
        let transformed = transform(&out.column(c));
        out.set_column(c, &transformed);
    }
    out
}

/// Separable 2D inverse transform: columns first, then rows, mirroring the
/// forward order in reverse.
pub fn inverse_2d(source: &ComplexMatrix) -> ComplexMatrix {
    let mut out = source.clone();
    for c in 0..out.cols() {
        let transformed = inverse(&out.column(c));
        out.set_column(c, &transformed);
    }
    for r in 0..out.rows() {
        let transformed = inverse(out.row(r));
        out.row_mut(r).copy_from_slice(&transformed);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reals(vs: &[f64]) -> Vec<Complex64> {
        vs.iter().map(|&v| Complex64::new(v, 0.0)).collect()
    }

    #[test]
    fn test_constant_signal_concentrates_at_dc() {
        let spectrum = transform(&reals(&[1.0, 1.0, 1.0, 1.0]));
        assert_abs_diff_eq!(spectrum[0].re, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spectrum[0].im, 0.0, epsilon = 1e-12);
        for bin in &spectrum[1..] {
            assert_abs_diff_eq!(bin.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_inverse_recovers_signal() {
        let x = reals(&[3.0, -1.0, 2.5, 0.0, 7.0]);
        let recovered = inverse(&transform(&x));
        for (a, b) in x.iter().zip(&recovered) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-9);
            assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_2d_round_trip_rectangular() {
        let m = ComplexMatrix::from_vec(
            2,
            3,
            reals(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        )
        .unwrap();
        let back = inverse_2d(&transform_2d(&m));
        for r in 0..2 {
            for c in 0..3 {
                assert_abs_diff_eq!(back[(r, c)].re, m[(r, c)].re, epsilon = 1e-9);
                assert_abs_diff_eq!(back[(r, c)].im, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_parseval_energy_preserved() {
        let x = reals(&[1.0, 0.0, -2.0, 4.0]);
        let spectrum = transform(&x);
        let time_energy: f64 = x.iter().map(|v| v.norm_sqr()).sum();
        let freq_energy: f64 = spectrum.iter().map(|v| v.norm_sqr()).sum::<f64>() / 4.0;
        assert_abs_diff_eq!(time_energy, freq_energy, epsilon = 1e-9);
    }
}
