//! Spatial and frequency-domain convolution.
//!
//! [`convolve`] is the direct sliding-window filter: per output pixel, per
//! selected channel, the kernel window is accumulated, scaled by the kernel
//! factor, offset by its bias and narrowed back to a byte. Geometry is
//! controlled by [`ConvolveMode`]: either the output shrinks by the kernel
//! margin on every side, or the source is mirror-expanded first so the
//! output keeps the source size.
//!
//! [`fast_convolve`] computes the same filter through the FFT: pad, split
//! into color planes, transform image and kernel, multiply the spectra,
//! inverse-transform and crop. For a 3x3 kernel it agrees with the spatial
//! path on the interior to rounding; the padding and crop arithmetic is kept
//! bit-compatible with the reference implementation.

use crate::error::{OpsError, OpsResult};
use crate::kernel::Kernel;
use spektr_core::convert::{self, round_to_byte};
use spektr_core::{ChannelMask, ComplexMatrix, PixelBuffer, RealMatrix, BGRA_BPP};
use spektr_fourier::fft;
use tracing::debug;

/// How [`convolve`] handles the border region the kernel cannot cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolveMode {
    /// The output shrinks by the kernel margin on every side; only pixels
    /// with a fully supported window are produced.
    Collapse,
    /// The source is mirror-expanded by the kernel margin first, so every
    /// source pixel gets a fully supported window and the output keeps the
    /// source size.
    #[default]
    Expand,
}

/// Filters a BGRA buffer with a kernel in the spatial domain.
///
/// Channels excluded from `mask` copy through from the source unchanged;
/// alpha is always forced opaque.
pub fn convolve(
    src: &PixelBuffer,
    kernel: &Kernel,
    mode: ConvolveMode,
    mask: ChannelMask,
) -> OpsResult<PixelBuffer> {
    require_bgra(src)?;
    let matrix = kernel.matrix()?;
    let offset = kernel.offset()?;
    debug!(
        kernel = kernel.name(),
        side = matrix.rows(),
        ?mode,
        mask = mask.bits(),
        "convolve"
    );

    let expanded;
    let (working, out_w, out_h) = match mode {
        ConvolveMode::Expand => {
            expanded = src.mirror_expand(offset)?;
            (&expanded, src.width(), src.height())
        }
        ConvolveMode::Collapse => {
            let side = matrix.rows();
            if 2 * offset >= src.width() || 2 * offset >= src.height() {
                return Err(OpsError::KernelTooLarge {
                    side,
                    max: src.width().min(src.height()),
                });
            }
            (src, src.width() - 2 * offset, src.height() - 2 * offset)
        }
    };

    let factor = kernel.factor();
    let bias = kernel.bias();
    let channels = [
        (0usize, ChannelMask::BLUE),
        (1, ChannelMask::GREEN),
        (2, ChannelMask::RED),
    ];

    let mut out = Vec::with_capacity(out_w * out_h * BGRA_BPP);
    for y in 0..out_h {
        for x in 0..out_w {
            let center = working.pixel(x + offset, y + offset);
            for (ch, flag) in channels {
                if !mask.contains(flag) {
                    out.push(center[ch]);
                    continue;
                }
                let mut sum = 0.0;
                for kr in 0..matrix.rows() {
                    for kc in 0..matrix.cols() {
                        let px = working.pixel(x + kc, y + kr);
                        sum += f64::from(px[ch]) * matrix[(kr, kc)];
                    }
                }
                out.push(round_to_byte(factor * sum + bias));
            }
            out.push(255);
        }
    }

    Ok(PixelBuffer::new(out, out_w, out_h, BGRA_BPP)?)
}

/// Filters a BGRA buffer with a kernel through the FFT.
///
/// The source is mirror-expanded by the kernel margin plus one, each color
/// plane and the zero-extended kernel are transformed, spectra are
/// multiplied, and the interior of the inverse transform is cropped back to
/// the source geometry. All three color channels are recomputed.
pub fn fast_convolve(src: &PixelBuffer, kernel: &Kernel) -> OpsResult<PixelBuffer> {
    require_bgra(src)?;
    let half = kernel.offset()? + 1;
    debug!(kernel = kernel.name(), half, "fast_convolve");

    let padded = src.mirror_expand(half)?;
    let (blue, green, red) = convert::split_channels(&padded)?;

    let side = fft::padded_side(padded.height(), padded.width());
    let kernel_spectrum = fft::transform_2d(&kernel.zero_extended(side)?.to_complex());

    let filter_plane = |plane: RealMatrix| -> OpsResult<RealMatrix> {
        let spectrum = fft::transform_2d(&plane.to_complex());
        let product = multiply_spectra(&spectrum, &kernel_spectrum)?;
        let filtered = fft::inverse_2d(&product, padded.height(), padded.width())?;

        let mut out = RealMatrix::zeros(src.height(), src.width());
        for r in 0..src.height() {
            for c in 0..src.width() {
                out[(r, c)] = filtered[(r + half + 1, c + half + 1)].re;
            }
        }
        Ok(out)
    };

    let blue = filter_plane(blue)?;
    let green = filter_plane(green)?;
    let red = filter_plane(red)?;
    Ok(convert::merge_channels(&red, &green, &blue)?)
}

/// Pointwise product of two equally-shaped spectra.
fn multiply_spectra(a: &ComplexMatrix, b: &ComplexMatrix) -> OpsResult<ComplexMatrix> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(spektr_core::Error::dimension_mismatch(
            (a.rows(), a.cols()),
            (b.rows(), b.cols()),
        )
        .into());
    }
    let product = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| x * y)
        .collect();
    Ok(ComplexMatrix::from_vec(a.rows(), a.cols(), product)?)
}

fn require_bgra(src: &PixelBuffer) -> OpsResult<()> {
    if src.bytes_per_pixel() != BGRA_BPP {
        return Err(spektr_core::Error::UnsupportedLayout {
            bytes_per_pixel: src.bytes_per_pixel(),
            expected: "4 bytes/pixel".into(),
        }
        .into());
    }
    Ok(())
}
