//! Recursive radix-2 fast Fourier transform.
//!
//! The 1D engine is the classic Cooley–Tukey even/odd split. Inputs whose
//! length is not a power of two are zero-padded (trailing zeros) up to the
//! next power of two before the split. The padding changes the analyzed
//! sequence — `transform` of a length-3 signal is the transform of the
//! length-4 padded signal, not a length-3 DFT. This matches the reference
//! behavior and is kept deliberately; callers that need the unpadded
//! spectrum should use [`crate::dft`].
//!
//! The 2D engine is separable: the matrix is zero-padded to a square whose
//! side is the next power of two at or above the larger dimension, then the
//! unchecked 1D recursion runs across rows and columns. The inverse accepts
//! an explicit target height/width and crops the padding back off.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use spektr_fourier::fft;
//!
//! let x = vec![
//!     Complex64::new(1.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//!     Complex64::new(0.0, 0.0),
//! ];
//! let spectrum = fft::transform(&x);
//! // impulse -> flat spectrum
//! for bin in &spectrum {
//!     assert!((bin.re - 1.0).abs() < 1e-12);
//! }
//! let back = fft::inverse(&spectrum, None).unwrap();
//! assert!((back[0].re - 1.0).abs() < 1e-12);
//! ```

use crate::error::{FourierError, FourierResult};
use num_complex::Complex64;
use spektr_core::ComplexMatrix;
use std::f64::consts::PI;
use tracing::trace;

/// Forward 1D transform.
///
/// Zero-pads to the next power of two, then runs the radix-2 recursion.
/// The output length is always a power of two.
pub fn transform(source: &[Complex64]) -> Vec<Complex64> {
    let padded = pad_to_power_of_two(source);
    radix2(&padded, -1.0)
}

/// Inverse 1D transform.
///
/// The input length must be a power of two (a radix-2 forward transform
/// cannot have produced anything else); other lengths are a
/// [`FourierError::NonPowerOfTwo`] error. The recursion output is divided by
/// the transform length, then optionally truncated to `target_len` to
/// discard padding introduced by the forward zero-padding.
pub fn inverse(source: &[Complex64], target_len: Option<usize>) -> FourierResult<Vec<Complex64>> {
    let n = source.len();
    if !n.is_power_of_two() {
        return Err(FourierError::NonPowerOfTwo { len: n });
    }
    if let Some(target) = target_len {
        if target > n {
            return Err(FourierError::TargetExceedsLength { len: n, target });
        }
    }

    let scale = 1.0 / n as f64;
    let mut out = radix2(source, 1.0);
    for v in &mut out {
        *v *= scale;
    }
    if let Some(target) = target_len {
        out.truncate(target);
    }
    Ok(out)
}

/// Forward 2D transform.
///
/// Pads the matrix into the top-left corner of a square zero matrix whose
/// side is `next_power_of_two(max(rows, cols))`, then transforms every row
/// and then every column.
pub fn transform_2d(source: &ComplexMatrix) -> ComplexMatrix {
    let side = padded_side(source.rows(), source.cols());
    trace!(rows = source.rows(), cols = source.cols(), side, "fft transform_2d");

    let mut data = vec![Complex64::new(0.0, 0.0); side * side];
    for r in 0..source.rows() {
        data[r * side..r * side + source.cols()].copy_from_slice(source.row(r));
    }

    pass_rows(&mut data, side, -1.0, None);
    transpose_square(&mut data, side);
    pass_rows(&mut data, side, -1.0, None);
    transpose_square(&mut data, side);

    into_matrix(data, side)
}

/// Inverse 2D transform with explicit output geometry.
///
/// The spectrum must be square with a power-of-two side. Columns are
/// inverse-transformed first, then rows, each pass carrying its own `1/side`
/// normalization; the result is cropped to `target_rows` x `target_cols`
/// (the un-padded region).
pub fn inverse_2d(
    spectrum: &ComplexMatrix,
    target_rows: usize,
    target_cols: usize,
) -> FourierResult<ComplexMatrix> {
    if !spectrum.is_square() {
        return Err(FourierError::NotSquare {
            rows: spectrum.rows(),
            cols: spectrum.cols(),
        });
    }
    let side = spectrum.rows();
    if !side.is_power_of_two() {
        return Err(FourierError::NonPowerOfTwo { len: side });
    }
    if target_rows > side || target_cols > side {
        return Err(FourierError::DimensionMismatch {
            side,
            target_rows,
            target_cols,
        });
    }
    trace!(side, target_rows, target_cols, "fft inverse_2d");

    let scale = 1.0 / side as f64;
    let mut data = spectrum.as_slice().to_vec();

    // columns first: transpose so each column is a contiguous row
    transpose_square(&mut data, side);
    pass_rows(&mut data, side, 1.0, Some(scale));
    transpose_square(&mut data, side);
    pass_rows(&mut data, side, 1.0, Some(scale));

    let mut out = ComplexMatrix::zeros(target_rows, target_cols);
    for r in 0..target_rows {
        out.row_mut(r)
            .copy_from_slice(&data[r * side..r * side + target_cols]);
    }
    Ok(out)
}

/// Square side used by the 2D padding.
#[inline]
pub fn padded_side(rows: usize, cols: usize) -> usize {
    rows.max(cols).next_power_of_two()
}

fn pad_to_power_of_two(source: &[Complex64]) -> Vec<Complex64> {
    let mut padded = source.to_vec();
    padded.resize(source.len().next_power_of_two(), Complex64::new(0.0, 0.0));
    padded
}

/// The unchecked recursion. Callers guarantee a power-of-two length.
///
/// `sign` is -1 for the forward transform and +1 for the (un-normalized)
/// inverse; it flips the twiddle `W(k, N) = e^(sign * 2*pi*i*k/N)`.
fn radix2(input: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = input.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return input.to_vec();
    }
    if n == 2 {
        return vec![input[0] + input[1], input[0] - input[1]];
    }

    let even: Vec<Complex64> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = input.iter().skip(1).step_by(2).copied().collect();
    let even = radix2(&even, sign);
    let odd = radix2(&odd, sign);

    let mut out = vec![Complex64::new(0.0, 0.0); n];
    let half = n / 2;
    for k in 0..half {
        let twiddle = Complex64::from_polar(1.0, sign * 2.0 * PI * k as f64 / n as f64);
        let t = twiddle * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    out
}

/// Transforms every `side`-long row of `data` in place, optionally scaling
/// each output element (the per-pass inverse normalization).
#[cfg(not(feature = "parallel"))]
fn pass_rows(data: &mut [Complex64], side: usize, sign: f64, scale: Option<f64>) {
    for row in data.chunks_mut(side) {
        transform_row(row, sign, scale);
    }
}

/// Parallel variant: rows are independent, so the pass maps one row per
/// rayon task without changing results.
#[cfg(feature = "parallel")]
fn pass_rows(data: &mut [Complex64], side: usize, sign: f64, scale: Option<f64>) {
    use rayon::prelude::*;
    data.par_chunks_mut(side)
        .for_each(|row| transform_row(row, sign, scale));
}

fn transform_row(row: &mut [Complex64], sign: f64, scale: Option<f64>) {
    let transformed = radix2(row, sign);
    match scale {
        Some(s) => {
            for (dst, v) in row.iter_mut().zip(transformed) {
                *dst = v * s;
            }
        }
        None => row.copy_from_slice(&transformed),
    }
}

/// In-place transpose of a `side` x `side` row-major buffer.
fn transpose_square(data: &mut [Complex64], side: usize) {
    for r in 0..side {
        for c in r + 1..side {
            data.swap(r * side + c, c * side + r);
        }
    }
}

fn into_matrix(data: Vec<Complex64>, side: usize) -> ComplexMatrix {
    let mut out = ComplexMatrix::zeros(side, side);
    for r in 0..side {
        out.row_mut(r)
            .copy_from_slice(&data[r * side..(r + 1) * side]);
    }
    out
}
