//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::PolyError;
use crate::multiplier::{DirectMultiplier, FftMultiplier, NaiveMultiplier, PolyMultiplier};

/// Factory trait for looking up multipliers by name.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn PolyMultiplier>, PolyError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn PolyMultiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(name: &str) -> Result<Arc<dyn PolyMultiplier>, PolyError> {
        match name {
            "fft" => Ok(Arc::new(FftMultiplier::new())),
            "naive" => Ok(Arc::new(NaiveMultiplier::new())),
            "direct" | "convolve" => Ok(Arc::new(DirectMultiplier::new())),
            _ => Err(PolyError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn PolyMultiplier>, PolyError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = Self::create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["fft", "naive", "direct"]
    }
}
