//! Lazy, create-once engine cache.

use std::sync::{Arc, OnceLock};

use super::AnalysisEngine;

/// Holds one engine, built on first use and never torn down.
///
/// A `static EngineCache` gives process-wide caching; a local one keeps tests
/// isolated from it.
pub struct EngineCache {
    engine: OnceLock<Arc<dyn AnalysisEngine>>,
}

impl EngineCache {
    pub const fn new() -> Self {
        Self {
            engine: OnceLock::new(),
        }
    }

    /// Return the cached engine, building it with `init` if none exists yet.
    /// Concurrent first callers block until the single initialization finishes.
    pub fn get_or_init<F>(&self, init: F) -> Arc<dyn AnalysisEngine>
    where
        F: FnOnce() -> Arc<dyn AnalysisEngine>,
    {
        Arc::clone(self.engine.get_or_init(|| {
            let engine = init();
            tracing::info!("Initialized cached analysis engine: {}", engine.name());
            engine
        }))
    }

    pub fn get(&self) -> Option<Arc<dyn AnalysisEngine>> {
        self.engine.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.get().is_some()
    }
}

impl Default for EngineCache {
    fn default() -> Self {
        Self::new()
    }
}
