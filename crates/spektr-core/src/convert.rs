//! Conversions between pixel buffers, numeric arrays and matrices.
//!
//! Every stage boundary in the workspace goes through this module: pixel
//! octets widen to reals or complex values on the way into a transform, and
//! numeric results narrow back to octets on the way out.
//!
//! Narrowing uses one convention everywhere: round to nearest with ties away
//! from zero, then clamp to `[0, 255]`. Round-trip pixel values in the test
//! suite depend on this being uniform.
//!
//! # Example
//!
//! ```rust
//! use spektr_core::convert;
//!
//! let reals = convert::bytes_to_reals(&[0, 128, 255]);
//! assert_eq!(convert::reals_to_bytes(&reals), vec![0, 128, 255]);
//! ```

use crate::buffer::{PixelBuffer, BGRA_BPP};
use crate::error::{Error, Result};
use crate::matrix::{ByteMatrix, ComplexMatrix, RealMatrix};
use num_complex::Complex64;

/// Rounds to the nearest integer (ties away from zero) and clamps to the
/// 8-bit pixel range.
#[inline]
pub fn round_to_byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/* ---------------------------------- arrays ---------------------------------- */

/// Widens bytes to reals.
pub fn bytes_to_reals(data: &[u8]) -> Vec<f64> {
    data.iter().map(|&b| f64::from(b)).collect()
}

/// Widens bytes to complex values with zero imaginary parts.
pub fn bytes_to_complex(data: &[u8]) -> Vec<Complex64> {
    data.iter().map(|&b| Complex64::new(f64::from(b), 0.0)).collect()
}

/// Widens reals to complex values with zero imaginary parts.
pub fn reals_to_complex(data: &[f64]) -> Vec<Complex64> {
    data.iter().map(|&v| Complex64::new(v, 0.0)).collect()
}

/// Real parts of a complex sequence.
pub fn complex_to_reals(data: &[Complex64]) -> Vec<f64> {
    data.iter().map(|c| c.re).collect()
}

/// Narrows reals to pixel octets (round, clamp).
pub fn reals_to_bytes(data: &[f64]) -> Vec<u8> {
    data.iter().map(|&v| round_to_byte(v)).collect()
}

/// Narrows complex values to pixel octets via their real parts.
pub fn complex_to_bytes(data: &[Complex64]) -> Vec<u8> {
    data.iter().map(|c| round_to_byte(c.re)).collect()
}

/* --------------------------------- matrices --------------------------------- */

/// Widens a byte matrix to reals.
pub fn byte_matrix_to_real(m: &ByteMatrix) -> RealMatrix {
    m.map(f64::from)
}

/// Widens a byte matrix to complex values.
pub fn byte_matrix_to_complex(m: &ByteMatrix) -> ComplexMatrix {
    m.map(|b| Complex64::new(f64::from(b), 0.0))
}

/// Narrows a real matrix to bytes (round, clamp).
pub fn real_matrix_to_byte(m: &RealMatrix) -> ByteMatrix {
    m.map(round_to_byte)
}

/// Narrows a complex matrix to bytes via real parts (round, clamp).
pub fn complex_matrix_to_byte(m: &ComplexMatrix) -> ByteMatrix {
    m.map(|c| round_to_byte(c.re))
}

/* ------------------------------ buffer -> matrix ----------------------------- */

/// Extracts the luminance plane of a buffer as a byte matrix.
///
/// Grayscale buffers are read directly. BGRA buffers are expected to have
/// been reduced to single-channel form by an external grayscale pass; the
/// first octet of each pixel is taken as the scalar. Row stride is honoured
/// in both layouts.
pub fn luminance_matrix(buf: &PixelBuffer) -> Result<ByteMatrix> {
    let bpp = buf.bytes_per_pixel();
    if bpp != 1 && bpp != BGRA_BPP {
        return Err(Error::UnsupportedLayout {
            bytes_per_pixel: bpp,
            expected: "1 or 4 bytes/pixel".into(),
        });
    }

    let mut data = Vec::with_capacity(buf.width() * buf.height());
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            data.push(buf.pixel(x, y)[0]);
        }
    }
    ByteMatrix::from_vec(buf.height(), buf.width(), data)
}

/// Luminance plane as a real matrix.
pub fn luminance_real_matrix(buf: &PixelBuffer) -> Result<RealMatrix> {
    Ok(byte_matrix_to_real(&luminance_matrix(buf)?))
}

/// Luminance plane as a complex matrix.
pub fn luminance_complex_matrix(buf: &PixelBuffer) -> Result<ComplexMatrix> {
    Ok(byte_matrix_to_complex(&luminance_matrix(buf)?))
}

/// Splits a BGRA buffer into three real matrices, returned as
/// (blue, green, red).
pub fn split_channels(buf: &PixelBuffer) -> Result<(RealMatrix, RealMatrix, RealMatrix)> {
    if buf.bytes_per_pixel() != BGRA_BPP {
        return Err(Error::UnsupportedLayout {
            bytes_per_pixel: buf.bytes_per_pixel(),
            expected: "4 bytes/pixel".into(),
        });
    }

    let (w, h) = (buf.width(), buf.height());
    let mut blue = Vec::with_capacity(w * h);
    let mut green = Vec::with_capacity(w * h);
    let mut red = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let px = buf.pixel(x, y);
            blue.push(f64::from(px[0]));
            green.push(f64::from(px[1]));
            red.push(f64::from(px[2]));
        }
    }
    Ok((
        RealMatrix::from_vec(h, w, blue)?,
        RealMatrix::from_vec(h, w, green)?,
        RealMatrix::from_vec(h, w, red)?,
    ))
}

/* ------------------------------ matrix -> buffer ----------------------------- */

/// Builds a BGRA buffer from a byte sequence.
///
/// With `grayscale` set, every input octet becomes one pixel with the scalar
/// replicated into blue, green and red and alpha forced opaque. Otherwise
/// the octets are taken as already-interleaved 4-byte pixels. Height is
/// derived from the element count and `width`; a count that does not divide
/// evenly is a typed error.
pub fn bytes_to_image(data: &[u8], width: usize, grayscale: bool) -> Result<PixelBuffer> {
    let expanded;
    let pixels: &[u8] = if grayscale {
        expanded = data
            .iter()
            .flat_map(|&v| [v, v, v, 255])
            .collect::<Vec<u8>>();
        &expanded
    } else {
        data
    };

    if width == 0 || pixels.len() % BGRA_BPP != 0 {
        return Err(Error::invalid_dimensions(
            width,
            0,
            "byte count is not a whole number of 4-byte pixels",
        ));
    }
    let total_pixels = pixels.len() / BGRA_BPP;
    if total_pixels % width != 0 {
        return Err(Error::invalid_dimensions(
            width,
            0,
            "pixel count is not a whole number of rows",
        ));
    }
    PixelBuffer::new(pixels.to_vec(), width, total_pixels / width, BGRA_BPP)
}

/// Builds a BGRA buffer from reals (round, clamp; see [`bytes_to_image`]).
pub fn reals_to_image(data: &[f64], width: usize, grayscale: bool) -> Result<PixelBuffer> {
    bytes_to_image(&reals_to_bytes(data), width, grayscale)
}

/// Builds a BGRA buffer from complex values via their real parts.
pub fn complex_to_image(data: &[Complex64], width: usize, grayscale: bool) -> Result<PixelBuffer> {
    bytes_to_image(&complex_to_bytes(data), width, grayscale)
}

/// Builds a grayscale-replicated BGRA buffer from a byte matrix.
pub fn byte_matrix_to_image(m: &ByteMatrix) -> Result<PixelBuffer> {
    bytes_to_image(m.as_slice(), m.cols(), true)
}

/// Builds a grayscale-replicated BGRA buffer from a real matrix.
pub fn real_matrix_to_image(m: &RealMatrix) -> Result<PixelBuffer> {
    byte_matrix_to_image(&real_matrix_to_byte(m))
}

/// Builds a grayscale-replicated BGRA buffer from a complex matrix.
pub fn complex_matrix_to_image(m: &ComplexMatrix) -> Result<PixelBuffer> {
    byte_matrix_to_image(&complex_matrix_to_byte(m))
}

/// Recombines per-channel real matrices into an opaque BGRA buffer.
///
/// All three matrices must agree in shape.
pub fn merge_channels(
    red: &RealMatrix,
    green: &RealMatrix,
    blue: &RealMatrix,
) -> Result<PixelBuffer> {
    for other in [green, blue] {
        if other.rows() != red.rows() || other.cols() != red.cols() {
            return Err(Error::dimension_mismatch(
                (red.rows(), red.cols()),
                (other.rows(), other.cols()),
            ));
        }
    }

    let (h, w) = (red.rows(), red.cols());
    let mut data = Vec::with_capacity(w * h * BGRA_BPP);
    for r in 0..h {
        for c in 0..w {
            data.push(round_to_byte(blue[(r, c)]));
            data.push(round_to_byte(green[(r, c)]));
            data.push(round_to_byte(red[(r, c)]));
            data.push(255);
        }
    }
    PixelBuffer::new(data, w, h, BGRA_BPP)
}

/// Recombines per-channel complex matrices (real parts) into an opaque BGRA
/// buffer.
pub fn merge_channels_complex(
    red: &ComplexMatrix,
    green: &ComplexMatrix,
    blue: &ComplexMatrix,
) -> Result<PixelBuffer> {
    merge_channels(&red.re(), &green.re(), &blue.re())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_byte() {
        assert_eq!(round_to_byte(0.4), 0);
        assert_eq!(round_to_byte(0.5), 1); // ties away from zero
        assert_eq!(round_to_byte(1.5), 2);
        assert_eq!(round_to_byte(2.5), 3);
        assert_eq!(round_to_byte(-3.0), 0);
        assert_eq!(round_to_byte(254.5), 255);
        assert_eq!(round_to_byte(900.0), 255);
    }

    #[test]
    fn test_array_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(reals_to_bytes(&bytes_to_reals(&bytes)), bytes);
        assert_eq!(complex_to_bytes(&bytes_to_complex(&bytes)), bytes);
    }

    #[test]
    fn test_bytes_to_image_grayscale() {
        let img = bytes_to_image(&[10, 20, 30, 40, 50, 60], 3, true).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel(1, 0), &[20, 20, 20, 255]);
    }

    #[test]
    fn test_bytes_to_image_interleaved() {
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let img = bytes_to_image(&data, 2, false).unwrap();
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixel(1, 0), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_bytes_to_image_rejects_ragged() {
        assert!(bytes_to_image(&[0u8; 10], 2, false).is_err());
        assert!(bytes_to_image(&[0u8; 12], 2, false).is_err()); // 3 pixels, width 2
    }

    #[test]
    fn test_luminance_matrix_respects_stride() {
        let buf = PixelBuffer::with_stride(vec![7, 8, 0, 9, 10, 0], 2, 2, 1, 3).unwrap();
        let m = luminance_matrix(&buf).unwrap();
        assert_eq!(m.as_slice(), &[7, 8, 9, 10]);
    }

    #[test]
    fn test_luminance_matrix_samples_first_octet() {
        // one BGRA pixel per entry; luminance takes offset 0
        let data = vec![11, 1, 2, 255, 22, 3, 4, 255];
        let buf = PixelBuffer::new(data, 2, 1, 4).unwrap();
        let m = luminance_matrix(&buf).unwrap();
        assert_eq!(m.as_slice(), &[11, 22]);
    }

    #[test]
    fn test_split_merge_round_trip() {
        let data = vec![
            1, 2, 3, 255, 4, 5, 6, 255, //
            7, 8, 9, 255, 10, 11, 12, 255,
        ];
        let buf = PixelBuffer::new(data.clone(), 2, 2, 4).unwrap();
        let (b, g, r) = split_channels(&buf).unwrap();
        assert_eq!(b[(0, 1)], 4.0);
        assert_eq!(g[(1, 0)], 8.0);
        assert_eq!(r[(1, 1)], 12.0);
        let merged = merge_channels(&r, &g, &b).unwrap();
        assert_eq!(merged.as_bytes(), &data[..]);
    }

    #[test]
    fn test_merge_rejects_mismatched_shapes() {
        let a = RealMatrix::zeros(2, 2);
        let b = RealMatrix::zeros(2, 3);
        assert!(merge_channels(&a, &a, &b).is_err());
    }
}
