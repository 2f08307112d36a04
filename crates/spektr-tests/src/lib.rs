//! Integration tests for the spektr crates.
//!
//! End-to-end pipelines across the core, transform and filtering crates:
//! pixel data in, conversions, transforms and convolutions, pixel data out.
