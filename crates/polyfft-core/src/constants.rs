//! Constants for the demonstration inputs and process exit codes.

/// Demonstration left operand: 3 + 2x + x² + 5x³.
pub const DEFAULT_A: [f64; 4] = [3.0, 2.0, 1.0, 5.0];

/// Demonstration right operand: 5x² + 2x³.
pub const DEFAULT_B: [f64; 4] = [0.0, 0.0, 5.0, 2.0];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Multiplier results did not agree during cross-checking.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}
