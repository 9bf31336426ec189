//! # polyfft-transform
//!
//! Recursive radix-2 Cooley-Tukey FFT over complex sequences whose length
//! is a power of two, plus the validated length type that guards it.

pub mod constants;
pub mod error;
pub mod fft_core;
pub mod length;
pub mod numeric;

// Re-exports
pub use constants::{DEFAULT_TOLERANCE, TAU};
pub use error::TransformError;
pub use fft_core::{
    forward_transform, forward_transform_in_place, inverse_transform, inverse_transform_in_place,
    Direction,
};
pub use length::PowerOfTwo;
pub use num_complex::Complex64;
