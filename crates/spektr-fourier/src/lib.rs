//! # spektr-fourier
//!
//! Discrete and fast Fourier transform engines for the spektr workspace.
//!
//! # Modules
//!
//! - [`dft`] - reference O(N²) transform, 1D and separable 2D, arbitrary
//!   lengths
//! - [`fft`] - recursive radix-2 Cooley–Tukey transform with zero-padding to
//!   the next power of two, 1D and separable 2D
//!
//! # Choosing an engine
//!
//! The DFT is the correctness oracle and handles arbitrary (e.g. odd kernel)
//! sizes exactly; the FFT is the production path for image-sized data. For a
//! power-of-two length the two agree to floating tolerance.
//!
//! # Feature Flags
//!
//! - `parallel` - run the row/column passes of the 2D transforms under
//!   rayon; results are unchanged.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dft;
mod error;
pub mod fft;

pub use error::{FourierError, FourierResult};
