//! # spektr-core
//!
//! Core types for the spektr image-filtering workspace.
//!
//! This crate provides the data model shared by every other spektr crate:
//!
//! - [`PixelBuffer`] - interleaved BGRA or grayscale octet buffers with
//!   explicit stride
//! - [`Matrix`], [`RealMatrix`], [`ComplexMatrix`] - row-major numeric
//!   matrices, the common currency of the transform and filter stages
//! - [`convert`] - conversions between buffers, arrays and matrices with a
//!   single rounding convention
//! - [`ChannelMask`] - bit flags selecting color channels
//!
//! ## Crate Structure
//!
//! `spektr-core` has no internal dependencies; the other workspace crates
//! build on it:
//!
//! ```text
//! spektr-core (this crate)
//!    ^
//!    |
//!    +-- spektr-fourier (DFT/FFT engines)
//!    +-- spektr-ops (convolution, kernels, PSF/OTF)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod channel;
pub mod convert;
pub mod error;
pub mod matrix;

pub use buffer::{PixelBuffer, BGRA_BPP};
pub use channel::ChannelMask;
pub use error::{Error, Result};
pub use matrix::{ByteMatrix, ComplexMatrix, Matrix, RealMatrix};
