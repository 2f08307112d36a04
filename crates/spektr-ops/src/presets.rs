//! The fixed kernel catalog.
//!
//! Every preset is fully specified by its matrix, factor and bias, and the
//! coefficient tables are kept exactly as in the reference catalog — they
//! double as canonical fixtures for the test suite.
//!
//! # Example
//!
//! ```rust
//! use spektr_ops::presets;
//!
//! let k = presets::sharpen();
//! assert_eq!(k.side().unwrap(), 3);
//! assert_eq!(k.matrix().unwrap()[(1, 1)], 9.0);
//! ```

use crate::kernel::Kernel;
use spektr_core::RealMatrix;

fn matrix(side: usize, data: &[f64]) -> RealMatrix {
    debug_assert_eq!(data.len(), side * side);
    let mut m = RealMatrix::zeros(side, side);
    for r in 0..side {
        m.row_mut(r).copy_from_slice(&data[r * side..(r + 1) * side]);
    }
    m
}

/* --------------------------------- copy --------------------------------- */

/// 3x3 identity kernel: center 1, everything else 0.
pub fn copy() -> Kernel {
    Kernel::preset(
        "Copy",
        matrix(3, &[
            0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0,
        ]),
        1.0,
        0.0,
    )
}

/* --------------------------------- blur --------------------------------- */

/// Small cross-shaped blur.
pub fn blur3x3() -> Kernel {
    Kernel::preset(
        "Blur 3x3",
        matrix(3, &[
            0.0, 0.2, 0.0, //
            0.2, 0.2, 0.2, //
            0.0, 0.2, 0.2,
        ]),
        1.0,
        0.0,
    )
}

/// Diamond-shaped 5x5 blur.
pub fn blur5x5() -> Kernel {
    Kernel::preset(
        "Blur 5x5",
        matrix(5, &[
            0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 1.0, 1.0, 1.0, 0.0, //
            1.0, 1.0, 1.0, 1.0, 1.0, //
            0.0, 1.0, 1.0, 1.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0,
        ]),
        1.0 / 13.0,
        0.0,
    )
}

/// 3x3 Gaussian blur.
pub fn gaussian3x3() -> Kernel {
    Kernel::preset(
        "Gaussian 3x3",
        matrix(3, &[
            1.0, 2.0, 1.0, //
            2.0, 4.0, 2.0, //
            1.0, 2.0, 1.0,
        ]),
        1.0 / 16.0,
        0.0,
    )
}

/// 5x5 Gaussian blur.
pub fn gaussian5x5() -> Kernel {
    Kernel::preset(
        "Gaussian 5x5",
        matrix(5, &[
            2.0, 4.0, 5.0, 4.0, 2.0, //
            4.0, 9.0, 12.0, 9.0, 4.0, //
            5.0, 12.0, 15.0, 12.0, 5.0, //
            4.0, 9.0, 12.0, 9.0, 4.0, //
            2.0, 4.0, 5.0, 4.0, 2.0,
        ]),
        1.0 / 159.0,
        0.0,
    )
}

/// Symmetric X-shaped motion blur.
pub fn motion_blur() -> Kernel {
    Kernel::preset(
        "Motion Blur",
        matrix(9, &[
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ]),
        1.0 / 18.0,
        0.0,
    )
}

/// Diagonal motion blur, top-left to bottom-right.
pub fn motion_blur_left_to_right() -> Kernel {
    let mut data = [0.0; 81];
    for i in 0..9 {
        data[i * 9 + i] = 1.0;
    }
    Kernel::preset("Motion Blur L2R", matrix(9, &data), 1.0 / 9.0, 0.0)
}

/// Diagonal motion blur, top-right to bottom-left.
pub fn motion_blur_right_to_left() -> Kernel {
    let mut data = [0.0; 81];
    for i in 0..9 {
        data[i * 9 + (8 - i)] = 1.0;
    }
    Kernel::preset("Motion Blur R2L", matrix(9, &data), 1.0 / 9.0, 0.0)
}

/// Uniform 3x3 soften.
pub fn soften() -> Kernel {
    Kernel::preset(
        "Soften",
        matrix(3, &[
            1.0, 1.0, 1.0, //
            1.0, 1.0, 1.0, //
            1.0, 1.0, 1.0,
        ]),
        1.0 / 8.0,
        0.0,
    )
}

/* -------------------------------- sharpen -------------------------------- */

/// Classic 9-center sharpen.
pub fn sharpen() -> Kernel {
    Kernel::preset(
        "Sharpen",
        matrix(3, &[
            -1.0, -1.0, -1.0, //
            -1.0, 9.0, -1.0, //
            -1.0, -1.0, -1.0,
        ]),
        1.0,
        0.0,
    )
}

/// Cross-shaped sharpen with 1/3 normalization.
pub fn sharpen3x3() -> Kernel {
    Kernel::preset(
        "Sharpen 3x3",
        matrix(3, &[
            0.0, -2.0, 0.0, //
            -2.0, 11.0, -2.0, //
            0.0, -2.0, 0.0,
        ]),
        1.0 / 3.0,
        0.0,
    )
}

/// Wide 5x5 sharpen.
pub fn sharpen5x5() -> Kernel {
    Kernel::preset(
        "Sharpen 5x5",
        matrix(5, &[
            -1.0, -1.0, -1.0, -1.0, -1.0, //
            -1.0, 2.0, 2.0, 2.0, -1.0, //
            -1.0, 2.0, 8.0, 2.0, 1.0, //
            -1.0, 2.0, 2.0, 2.0, -1.0, //
            -1.0, -1.0, -1.0, -1.0, -1.0,
        ]),
        1.0 / 8.0,
        0.0,
    )
}

/// Aggressive sharpen with a negative center.
pub fn intense_sharpen() -> Kernel {
    Kernel::preset(
        "Intense Sharpen",
        matrix(3, &[
            1.0, 1.0, 1.0, //
            1.0, -7.0, 1.0, //
            1.0, 1.0, 1.0,
        ]),
        1.0,
        0.0,
    )
}

/* ----------------------------- edge detection ----------------------------- */

/// Laplacian-style all-direction edge detector.
pub fn edge_detect() -> Kernel {
    Kernel::preset(
        "Edge Detection",
        matrix(3, &[
            -1.0, -1.0, -1.0, //
            -1.0, 8.0, -1.0, //
            -1.0, -1.0, -1.0,
        ]),
        1.0,
        0.0,
    )
}

/// 45-degree diagonal edge detector.
pub fn edge_detect_45() -> Kernel {
    Kernel::preset(
        "Edge Detection 45",
        matrix(5, &[
            -1.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, -2.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 6.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, -2.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, -1.0,
        ]),
        1.0,
        0.0,
    )
}

/// Horizontal edge detector.
pub fn edge_detect_horizontal() -> Kernel {
    Kernel::preset(
        "Horizontal Edge Detection",
        matrix(5, &[
            0.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, //
            -1.0, -1.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]),
        1.0,
        0.0,
    )
}

/// Vertical edge detector.
pub fn edge_detect_vertical() -> Kernel {
    Kernel::preset(
        "Vertical Edge Detection",
        matrix(5, &[
            0.0, 0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, 0.0,
        ]),
        1.0,
        0.0,
    )
}

/// Corner-to-corner gradient detector.
pub fn edge_detect_diagonal() -> Kernel {
    Kernel::preset(
        "Edge Detection TL-BR",
        matrix(3, &[
            -5.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, //
            0.0, 0.0, 5.0,
        ]),
        1.0,
        0.0,
    )
}

/* --------------------------------- emboss --------------------------------- */

/// Emboss centered at 128.
pub fn emboss() -> Kernel {
    Kernel::preset(
        "Emboss",
        matrix(3, &[
            2.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, -1.0,
        ]),
        1.0,
        128.0,
    )
}

/// 45-degree emboss.
pub fn emboss_45() -> Kernel {
    Kernel::preset(
        "Emboss 45",
        matrix(3, &[
            -1.0, -1.0, 0.0, //
            -1.0, 0.0, 1.0, //
            0.0, 1.0, 1.0,
        ]),
        1.0,
        128.0,
    )
}

/// Corner-to-corner emboss.
pub fn emboss_diagonal() -> Kernel {
    Kernel::preset(
        "Emboss TL-BR",
        matrix(3, &[
            -1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0,
        ]),
        1.0,
        128.0,
    )
}

/// Wide 5x5 emboss.
pub fn intense_emboss() -> Kernel {
    Kernel::preset(
        "Intense Emboss",
        matrix(5, &[
            -1.0, -1.0, -1.0, -1.0, 0.0, //
            -1.0, -1.0, -1.0, 0.0, 1.0, //
            -1.0, -1.0, 0.0, 1.0, 1.0, //
            -1.0, 0.0, 1.0, 1.0, 1.0, //
            0.0, 1.0, 1.0, 1.0, 1.0,
        ]),
        1.0,
        128.0,
    )
}

/// High-pass filter centered at 128.
pub fn high_pass() -> Kernel {
    Kernel::preset(
        "High-Pass 3x3",
        matrix(3, &[
            -1.0, -2.0, -1.0, //
            -2.0, 12.0, -2.0, //
            -1.0, -2.0, -1.0,
        ]),
        1.0 / 16.0,
        128.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_catalog_kernels_are_valid() {
        let all = [
            copy(),
            blur3x3(),
            blur5x5(),
            gaussian3x3(),
            gaussian5x5(),
            motion_blur(),
            motion_blur_left_to_right(),
            motion_blur_right_to_left(),
            soften(),
            sharpen(),
            sharpen3x3(),
            sharpen5x5(),
            intense_sharpen(),
            edge_detect(),
            edge_detect_45(),
            edge_detect_horizontal(),
            edge_detect_vertical(),
            edge_detect_diagonal(),
            emboss(),
            emboss_45(),
            emboss_diagonal(),
            intense_emboss(),
            high_pass(),
        ];
        for k in &all {
            let m = k.matrix().unwrap();
            assert!(m.is_square(), "{} is not square", k.name());
            assert_eq!(m.rows() % 2, 1, "{} has even side", k.name());
        }
    }

    #[test]
    fn test_copy_is_identity() {
        let k = copy();
        let m = k.matrix().unwrap();
        assert_eq!(m[(1, 1)], 1.0);
        let sum: f64 = m.as_slice().iter().sum();
        assert_eq!(sum, 1.0);
        assert_eq!(k.bias(), 0.0);
    }

    #[test]
    fn test_emboss_bias_centers_at_128() {
        assert_eq!(emboss().bias(), 128.0);
        assert_eq!(emboss().matrix().unwrap()[(0, 0)], 2.0);
    }

    #[test]
    fn test_blur_weights_normalize() {
        let k = gaussian3x3();
        let n = k.normalized().unwrap();
        let sum: f64 = n.as_slice().iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);

        let k = blur5x5();
        let n = k.normalized().unwrap();
        let sum: f64 = n.as_slice().iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_motion_blur_diagonals() {
        let l2r = motion_blur_left_to_right();
        let m = l2r.matrix().unwrap();
        for i in 0..9 {
            assert_eq!(m[(i, i)], 1.0);
        }
        let r2l = motion_blur_right_to_left();
        let m = r2l.matrix().unwrap();
        for i in 0..9 {
            assert_eq!(m[(i, 8 - i)], 1.0);
        }
    }
}
