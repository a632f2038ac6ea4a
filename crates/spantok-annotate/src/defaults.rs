//! Process-wide default engine, pool and tokenizer factory.

use std::sync::{Arc, OnceLock};

use spantok::{AnalysisEngine, EngineCache, ResourcePool, TokenizerFactory};

use crate::annotation::AnnotatorPipeline;

static DEFAULT_ENGINE: EngineCache = EngineCache::new();
static DEFAULT_POOL: OnceLock<Arc<ResourcePool>> = OnceLock::new();

/// The sentence detection + tokenization pipeline, built on first use and
/// shared for the life of the process.
pub fn default_analysis_engine() -> Arc<dyn AnalysisEngine> {
    DEFAULT_ENGINE.get_or_init(|| Arc::new(AnnotatorPipeline::sentence_and_token()))
}

/// Default-sized pool around [`default_analysis_engine`].
pub fn default_resource_pool() -> Arc<ResourcePool> {
    Arc::clone(DEFAULT_POOL.get_or_init(|| Arc::new(ResourcePool::new(default_analysis_engine()))))
}

/// A tokenizer factory over the shared default pool.
pub fn default_tokenizer_factory() -> TokenizerFactory {
    TokenizerFactory::new(default_resource_pool())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_is_created_once() {
        let a = default_analysis_engine();
        let b = default_analysis_engine();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "sentence+token");
    }

    #[test]
    fn test_default_factories_share_a_pool() {
        let a = default_tokenizer_factory();
        let b = default_tokenizer_factory();
        assert!(Arc::ptr_eq(a.resource_pool(), b.resource_pool()));
        assert!(Arc::ptr_eq(
            a.resource_pool().engine(),
            &default_analysis_engine()
        ));
    }
}
