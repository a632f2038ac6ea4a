//! Analysis engine abstraction.
//!
//! The engine that segments and labels text is pluggable: anything that can
//! populate an [`AnnotationContext`] with spans and resolve span type names
//! implements [`AnalysisEngine`]. The workspace ships one implementation in
//! `spantok-annotate`; tests and callers can supply their own.

mod cache;
mod registry;

pub use cache::EngineCache;
pub use registry::SpanTypeRegistry;

use thiserror::Error;

use crate::models::{AnnotationContext, SpanKind};

/// Errors from analysis engines and their annotators.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Backend not available: {0}")]
    BackendNotAvailable(String),

    #[error("Annotation failed: {0}")]
    Failed(String),

    #[error("Span {kind} {start}..{end} is not a valid range of a {len}-byte text")]
    InvalidSpan {
        kind: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A pluggable, stateful text analysis step.
///
/// `process` runs the full analysis over the context's text buffer and
/// records the spans it finds. Engines are shared across threads; any
/// per-call state belongs in the context, not the engine.
pub trait AnalysisEngine: Send + Sync {
    /// Identifier used in logs (e.g. "sentence+token").
    fn name(&self) -> &str;

    /// Span type names this engine can produce.
    fn span_types(&self) -> &SpanTypeRegistry;

    /// Resolve a span type name to a kind this engine knows.
    fn resolve_span_type(&self, name: &str) -> Option<SpanKind> {
        self.span_types().resolve(name)
    }

    /// Whether the engine can currently accept work.
    fn is_available(&self) -> bool {
        true
    }

    /// Human-readable reason when `is_available` returns false.
    fn availability_hint(&self) -> String {
        String::new()
    }

    /// Analyze the context's text, adding spans to it.
    fn process(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError>;
}
