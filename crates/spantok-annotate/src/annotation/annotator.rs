//! Annotator trait.

use spantok::{AnnotationContext, AnnotationError, SpanTypeRegistry};

/// One stage of an [`AnnotatorPipeline`](super::AnnotatorPipeline).
pub trait Annotator: Send + Sync {
    /// Short identifier, used to name the pipeline (e.g. "sentence").
    fn annotation_type(&self) -> &str;

    /// Human-readable name for log output.
    fn display_name(&self) -> &str;

    /// Whether the stage is ready to run.
    fn is_available(&self) -> bool {
        true
    }

    /// Human-readable reason when `is_available` returns false.
    fn availability_hint(&self) -> String {
        String::new()
    }

    /// Add the names of any custom span types this stage produces.
    fn register_span_types(&self, _registry: &mut SpanTypeRegistry) {}

    /// Annotate the context's text in place.
    fn annotate(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError>;
}
