//! Multiplier selection logic.

use std::sync::Arc;

use polyfft_core::registry::MultiplierFactory;
use polyfft_core::{PolyError, PolyMultiplier};

/// Get multipliers to run based on the algorithm selection.
///
/// `"all"` expands to every multiplier the factory knows.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn PolyMultiplier>>, PolyError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
