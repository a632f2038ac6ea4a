//! Resource pool gating access to an analysis engine.
//!
//! The pool hands out [`AnnotationContext`]s, runs the engine over them and
//! takes them back for reuse. It bounds how many contexts may be checked out
//! at once; `acquire` fails fast instead of waiting when the bound is hit.

mod config;

pub use config::PoolConfig;

use std::io::Read;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::engine::AnalysisEngine;
use crate::error::{PipelineError, Result};
use crate::models::{AnnotationContext, Lease, SpanKind};

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

/// Pool of reusable analysis contexts around one shared engine.
pub struct ResourcePool {
    id: u64,
    engine: Arc<dyn AnalysisEngine>,
    config: PoolConfig,
    idle: Mutex<Vec<AnnotationContext>>,
    in_use: Arc<AtomicUsize>,
}

impl ResourcePool {
    /// Create a pool with default sizing.
    pub fn new(engine: Arc<dyn AnalysisEngine>) -> Self {
        Self::with_config(engine, PoolConfig::default())
    }

    pub fn with_config(engine: Arc<dyn AnalysisEngine>, config: PoolConfig) -> Self {
        info!(
            "Created resource pool for engine {} (max {} contexts)",
            engine.name(),
            config.max_contexts
        );
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            engine,
            config,
            idle: Mutex::new(Vec::new()),
            in_use: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn engine(&self) -> &Arc<dyn AnalysisEngine> {
        &self.engine
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of contexts currently checked out.
    pub fn in_use(&self) -> usize {
        self.in_use.load(Ordering::Acquire)
    }

    /// Number of cleared contexts waiting for reuse.
    pub fn idle_count(&self) -> usize {
        self.lock_idle().len()
    }

    /// Resolve a span type name through the engine's registry.
    pub fn resolve_span_type(&self, name: &str) -> Result<SpanKind> {
        self.engine.resolve_span_type(name).ok_or_else(|| {
            PipelineError::InvalidArgument(format!(
                "unknown span type '{}' for engine {}",
                name,
                self.engine.name()
            ))
        })
    }

    /// Check out an empty context.
    pub fn acquire(&self) -> Result<AnnotationContext> {
        if !self.engine.is_available() {
            return Err(PipelineError::EngineUnavailable(format!(
                "{} is not available: {}",
                self.engine.name(),
                self.engine.availability_hint()
            )));
        }

        let max = self.config.max_contexts;
        self.in_use
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < max).then_some(n + 1)
            })
            .map_err(|n| {
                PipelineError::EngineUnavailable(format!(
                    "all {} analysis contexts are in use",
                    n
                ))
            })?;

        let mut context = self.lock_idle().pop().unwrap_or_default();
        context.lease = Some(Lease {
            pool_id: self.id,
            in_use: Arc::clone(&self.in_use),
        });
        debug!("Acquired analysis context ({} in use)", self.in_use());
        Ok(context)
    }

    /// Run the engine over the context's current text.
    pub fn analyze(&self, context: &mut AnnotationContext) -> Result<()> {
        self.engine.process(context)?;
        debug!(
            "Engine {} found {} spans in {} bytes",
            self.engine.name(),
            context.span_count(),
            context.text().len()
        );
        Ok(())
    }

    /// Acquire a context, load `text` into it and analyze it.
    ///
    /// On failure the context has already been released.
    pub fn process(&self, text: &str) -> Result<AnnotationContext> {
        let mut context = self.acquire()?;
        context.set_text(text);
        if let Err(e) = self.analyze(&mut context) {
            self.release(context);
            return Err(e);
        }
        Ok(context)
    }

    /// Like [`process`](Self::process), reading UTF-8 text from a byte stream.
    pub fn process_reader<R: Read>(&self, mut reader: R) -> Result<AnnotationContext> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            PipelineError::InvalidArgument(format!("input stream is not valid UTF-8: {}", e))
        })?;
        self.process(&text)
    }

    /// Return a context to the pool. Its spans are discarded.
    pub fn release(&self, mut context: AnnotationContext) {
        match context.lease.take() {
            Some(lease) if lease.pool_id == self.id => {
                lease.in_use.fetch_sub(1, Ordering::AcqRel);
            }
            Some(lease) => {
                lease.in_use.fetch_sub(1, Ordering::AcqRel);
                warn!("Released a context that belongs to another pool; dropping it");
                return;
            }
            None => {
                debug!("Released a context that was never checked out; dropping it");
                return;
            }
        }

        context.clear();
        let mut idle = self.lock_idle();
        if idle.len() < self.config.max_idle {
            idle.push(context);
        }
    }

    fn lock_idle(&self) -> MutexGuard<'_, Vec<AnnotationContext>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcePool")
            .field("engine", &self.engine.name())
            .field("config", &self.config)
            .field("in_use", &self.in_use())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::WhitespaceEngine;

    fn pool_with(engine: WhitespaceEngine, max_contexts: usize) -> ResourcePool {
        ResourcePool::with_config(
            Arc::new(engine),
            PoolConfig {
                max_contexts,
                max_idle: max_contexts,
            },
        )
    }

    #[test]
    fn test_process_populates_spans() {
        let pool = pool_with(WhitespaceEngine::new(), 2);
        let ctx = pool.process("Dogs bark. Cats meow.").unwrap();

        assert_eq!(ctx.select(&SpanKind::Sentence).len(), 2);
        assert_eq!(ctx.select(&SpanKind::Token).len(), 4);
        assert_eq!(pool.in_use(), 1);

        pool.release(ctx);
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.idle_count(), 1);
    }

    #[test]
    fn test_released_context_is_reused_empty() {
        let pool = pool_with(WhitespaceEngine::new(), 1);
        let ctx = pool.process("one two").unwrap();
        pool.release(ctx);

        let reused = pool.acquire().unwrap();
        assert_eq!(reused.text(), "");
        assert_eq!(reused.span_count(), 0);
        assert_eq!(pool.idle_count(), 0);
        pool.release(reused);
    }

    #[test]
    fn test_acquire_fails_when_exhausted() {
        let pool = pool_with(WhitespaceEngine::new(), 1);
        let held = pool.acquire().unwrap();

        let err = pool.acquire().unwrap_err();
        assert!(matches!(err, PipelineError::EngineUnavailable(_)));

        pool.release(held);
        assert!(pool.acquire().is_ok());
    }

    #[test]
    fn test_acquire_fails_when_engine_unavailable() {
        let engine = WhitespaceEngine::new();
        engine.available.store(false, Ordering::SeqCst);
        let pool = pool_with(engine, 2);

        let err = pool.acquire().unwrap_err();
        assert!(err.to_string().contains("test engine switched off"));
        assert_eq!(pool.in_use(), 0);
    }

    #[test]
    fn test_analysis_failure_releases_context() {
        let pool = pool_with(WhitespaceEngine::new().failing_on("BOOM"), 1);

        let err = pool.process("this goes BOOM").unwrap_err();
        assert!(matches!(err, PipelineError::AnalysisFailure(_)));
        assert_eq!(pool.in_use(), 0);
        assert!(pool.process("fine now").is_ok());
    }

    #[test]
    fn test_dropped_context_frees_slot() {
        let pool = pool_with(WhitespaceEngine::new(), 1);
        {
            let _ctx = pool.acquire().unwrap();
            assert_eq!(pool.in_use(), 1);
        }
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_foreign_context_is_not_pooled() {
        let a = pool_with(WhitespaceEngine::new(), 1);
        let b = pool_with(WhitespaceEngine::new(), 1);
        let ctx = a.acquire().unwrap();

        b.release(ctx);
        assert_eq!(a.in_use(), 0);
        assert_eq!(b.idle_count(), 0);

        b.release(AnnotationContext::new("detached"));
        assert_eq!(b.idle_count(), 0);
    }

    #[test]
    fn test_resolve_span_type() {
        let pool = pool_with(WhitespaceEngine::new(), 1);
        assert_eq!(pool.resolve_span_type("word").unwrap(), SpanKind::Token);
        let err = pool.resolve_span_type("paragraph").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_process_reader_rejects_invalid_utf8() {
        let pool = pool_with(WhitespaceEngine::new(), 1);
        let err = pool.process_reader(&[0xff, 0xfe, 0x00][..]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(pool.in_use(), 0);

        let ctx = pool.process_reader("Cats meow.".as_bytes()).unwrap();
        assert_eq!(ctx.text(), "Cats meow.");
        pool.release(ctx);
    }
}
