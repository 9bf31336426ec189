//! PolyFFT library: application logic for the polynomial multiplier binary.

pub mod app;
pub mod config;
pub mod errors;
