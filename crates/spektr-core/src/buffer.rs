//! Interleaved pixel buffers.
//!
//! [`PixelBuffer`] is the boundary type of the crate: decoded images arrive
//! as one, filtered images leave as one. Two layouts exist:
//!
//! - 4 bytes/pixel, interleaved blue, green, red, alpha;
//! - 1 byte/pixel grayscale.
//!
//! Row stride may exceed `width * bytes_per_pixel` when the decoder padded
//! rows; every consumer in this workspace walks rows through the declared
//! stride rather than assuming packed data.

use crate::error::{Error, Result};

/// Bytes per pixel of an interleaved BGRA buffer.
pub const BGRA_BPP: usize = 4;

/// An image as a raw octet sequence plus its geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    stride: usize,
}

impl PixelBuffer {
    /// Creates a packed buffer (`stride == width * bytes_per_pixel`).
    ///
    /// Returns [`Error::SizeMismatch`] when the data length does not match
    /// the geometry.
    pub fn new(data: Vec<u8>, width: usize, height: usize, bytes_per_pixel: usize) -> Result<Self> {
        Self::with_stride(data, width, height, bytes_per_pixel, width * bytes_per_pixel)
    }

    /// Creates a buffer with an explicit row stride.
    pub fn with_stride(
        data: Vec<u8>,
        width: usize,
        height: usize,
        bytes_per_pixel: usize,
        stride: usize,
    ) -> Result<Self> {
        let min_stride = width * bytes_per_pixel;
        if stride < min_stride {
            return Err(Error::InvalidStride {
                stride,
                min_stride,
                width,
            });
        }
        if data.len() != stride * height {
            return Err(Error::size_mismatch(stride * height, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
            bytes_per_pixel,
            stride,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per pixel (4 for BGRA, 1 for grayscale).
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw octets, including any row padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The pixel bytes of row `y`, stride padding excluded.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width * self.bytes_per_pixel]
    }

    /// The bytes of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = y * self.stride + x * self.bytes_per_pixel;
        &self.data[start..start + self.bytes_per_pixel]
    }

    /// Enlarges the buffer by `margin` pixels on every side with mirrored
    /// edge content (reflection about the edge pixel, edge not repeated).
    ///
    /// The alpha position of border pixels is forced opaque for BGRA
    /// buffers. The result is packed regardless of the source stride.
    ///
    /// Returns [`Error::MarginTooLarge`] when the reflection would reach
    /// past the opposite edge (`margin >= width` or `margin >= height`).
    pub fn mirror_expand(&self, margin: usize) -> Result<Self> {
        if margin >= self.width || margin >= self.height {
            return Err(Error::MarginTooLarge {
                margin,
                width: self.width,
                height: self.height,
            });
        }

        let bpp = self.bytes_per_pixel;
        let out_w = self.width + 2 * margin;
        let out_h = self.height + 2 * margin;
        let mut out = vec![0u8; out_w * out_h * bpp];

        for oy in 0..out_h {
            let sy = reflect_101(oy as isize - margin as isize, self.height);
            for ox in 0..out_w {
                let sx = reflect_101(ox as isize - margin as isize, self.width);
                let src = self.pixel(sx, sy);
                let dst = (oy * out_w + ox) * bpp;
                out[dst..dst + bpp].copy_from_slice(src);

                let in_border = oy < margin
                    || oy >= out_h - margin
                    || ox < margin
                    || ox >= out_w - margin;
                if in_border && bpp == BGRA_BPP {
                    out[dst + 3] = 255;
                }
            }
        }

        Self::new(out, out_w, out_h, bpp)
    }
}

/// Reflects a possibly out-of-range coordinate back into `[0, len)` without
/// repeating the edge sample (the `-1 -> 1`, `len -> len - 2` convention).
#[inline]
fn reflect_101(c: isize, len: usize) -> usize {
    let n = len as isize;
    let r = if c < 0 {
        -c
    } else if c >= n {
        2 * n - 2 - c
    } else {
        c
    };
    r as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(data: Vec<u8>, w: usize, h: usize) -> PixelBuffer {
        PixelBuffer::new(data, w, h, 1).unwrap()
    }

    #[test]
    fn test_stride_validation() {
        // 2x2 at 4 bpp needs at least stride 8
        assert!(PixelBuffer::with_stride(vec![0; 16], 2, 2, 4, 7).is_err());
        assert!(PixelBuffer::with_stride(vec![0; 20], 2, 2, 4, 10).is_ok());
        assert!(PixelBuffer::with_stride(vec![0; 16], 2, 2, 4, 10).is_err());
    }

    #[test]
    fn test_row_skips_stride_padding() {
        // stride 3, width 2, 1 bpp: third byte of each row is padding
        let buf = PixelBuffer::with_stride(vec![1, 2, 9, 3, 4, 9], 2, 2, 1, 3).unwrap();
        assert_eq!(buf.row(0), &[1, 2]);
        assert_eq!(buf.row(1), &[3, 4]);
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
    }

    #[test]
    fn test_mirror_expand_grayscale() {
        // 3x3 ramp
        let buf = gray((1..=9).collect(), 3, 3);
        let out = buf.mirror_expand(1).unwrap();
        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 5);
        // center preserved
        assert_eq!(out.pixel(1 + 1, 1 + 1)[0], 5);
        // left edge mirrors column 1, top edge mirrors row 1
        assert_eq!(out.pixel(0, 1)[0], 2);
        assert_eq!(out.pixel(1, 0)[0], 4);
        // corner mirrors (1, 1)
        assert_eq!(out.pixel(0, 0)[0], 5);
    }

    #[test]
    fn test_mirror_expand_margin_limit() {
        let buf = gray(vec![0; 9], 3, 3);
        assert!(buf.mirror_expand(2).is_ok());
        assert!(buf.mirror_expand(3).is_err());
    }

    #[test]
    fn test_mirror_expand_border_alpha_opaque() {
        let buf = PixelBuffer::new(vec![10; 4 * 4], 2, 2, 4).unwrap();
        let out = buf.mirror_expand(1).unwrap();
        assert_eq!(out.pixel(0, 0)[3], 255);
        // interior keeps the source alpha
        assert_eq!(out.pixel(1, 1)[3], 10);
    }
}
