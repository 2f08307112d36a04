//! # spektr-ops
//!
//! Image filtering on top of the spektr numeric core: convolution kernels,
//! a preset kernel catalog, spatial and FFT-accelerated convolution, and
//! PSF/OTF conversion.
//!
//! # Modules
//!
//! - [`kernel`] - the validated [`Kernel`] value object
//! - [`presets`] - the fixed kernel catalog (blurs, sharpens, edge
//!   detectors, embosses)
//! - [`convolve`] - spatial sliding-window and FFT convolution
//! - [`otf`] - point spread function / optical transfer function conversion
//!
//! # Example
//!
//! ```rust
//! use spektr_core::{ChannelMask, PixelBuffer};
//! use spektr_ops::{convolve, presets, ConvolveMode};
//!
//! let src = PixelBuffer::new(vec![128; 4 * 4 * 4], 4, 4, 4).unwrap();
//! let out = convolve(&src, &presets::gaussian3x3(), ConvolveMode::Expand, ChannelMask::ALL)
//!     .unwrap();
//! assert_eq!(out.width(), 4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convolve;
mod error;
pub mod kernel;
pub mod otf;
pub mod presets;

pub use convolve::{convolve, fast_convolve, ConvolveMode};
pub use error::{OpsError, OpsResult};
pub use kernel::Kernel;
pub use otf::{otf2psf, psf2otf, psf2otf_sized};
