//! Resource pool sizing.

use serde::{Deserialize, Serialize};

/// Contexts allotted per available CPU.
const CONTEXTS_PER_CPU: usize = 10;

/// Sizing for a [`ResourcePool`](super::ResourcePool).
///
/// `max_contexts` is the number of callers that may hold a context at the
/// same time. A tokenizer holds one only while it is being constructed; a
/// document iterator only while it loads the next document. Size it to the
/// number of threads expected to tokenize concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Upper bound on contexts checked out at once.
    pub max_contexts: usize,
    /// Upper bound on cleared contexts kept for reuse.
    pub max_idle: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            max_contexts: cpus * CONTEXTS_PER_CPU,
            max_idle: cpus,
        }
    }
}

impl PoolConfig {
    /// A pool that serves one caller at a time.
    pub fn single() -> Self {
        Self {
            max_contexts: 1,
            max_idle: 1,
        }
    }
}
