//! # polyfft-core
//!
//! Polynomial multiplication over real coefficient sequences.
//! Implements the FFT-based product, the quadratic naive reference, and a
//! general direct convolution, behind a common `PolyMultiplier` trait.

pub mod constants;
pub mod error;
pub mod multiplier;
pub mod poly;
pub mod registry;

// Re-exports
pub use constants::{exit_codes, DEFAULT_A, DEFAULT_B};
pub use error::PolyError;
pub use multiplier::{DirectMultiplier, FftMultiplier, NaiveMultiplier, PolyMultiplier};
pub use poly::{convolve, multiply, multiply_naive, trim_to_product};
pub use registry::{DefaultFactory, MultiplierFactory};
