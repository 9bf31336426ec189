//! Error handling and exit codes.

use polyfft_core::constants::exit_codes;
use polyfft_core::PolyError;

/// Map a multiplication error to the process exit code.
pub fn handle_error(err: &PolyError) -> i32 {
    match err {
        PolyError::Transform(_) | PolyError::Calculation(_) => exit_codes::ERROR_GENERIC,
        PolyError::InvalidInput(_) | PolyError::Config(_) => exit_codes::ERROR_CONFIG,
        PolyError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}
