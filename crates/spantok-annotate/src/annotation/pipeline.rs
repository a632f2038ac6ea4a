//! Ordered chain of annotators exposed as one analysis engine.

use tracing::debug;

use spantok::{
    AnalysisEngine, AnnotationContext, AnnotationError, PipelineSettings, SpanTypeRegistry,
};

use super::annotator::Annotator;
use super::lemma::LemmaAnnotator;
use super::sentence::SentenceAnnotator;
use super::stem::StemAnnotator;
use super::token::TokenAnnotator;

/// Runs its annotators in insertion order over each context.
///
/// The span type registry always knows `sentence` and `token`, plus any
/// custom types the annotators register.
pub struct AnnotatorPipeline {
    name: String,
    annotators: Vec<Box<dyn Annotator>>,
    registry: SpanTypeRegistry,
}

impl AnnotatorPipeline {
    /// A pipeline with no stages.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            annotators: Vec::new(),
            registry: SpanTypeRegistry::default(),
        }
    }

    /// Sentence detection followed by tokenization.
    pub fn sentence_and_token() -> Self {
        Self::new()
            .with_annotator(SentenceAnnotator)
            .with_annotator(TokenAnnotator)
    }

    /// The default stages plus stemming (when `stem_language` is set) and
    /// lemmatization.
    pub fn from_settings(settings: &PipelineSettings) -> Result<Self, AnnotationError> {
        let mut pipeline = Self::sentence_and_token();
        if let Some(language) = &settings.stem_language {
            pipeline = pipeline.with_annotator(StemAnnotator::for_language(language)?);
        }
        Ok(pipeline.with_annotator(LemmaAnnotator::new()))
    }

    /// Append a stage.
    pub fn with_annotator(mut self, annotator: impl Annotator + 'static) -> Self {
        annotator.register_span_types(&mut self.registry);
        if !self.name.is_empty() {
            self.name.push('+');
        }
        self.name.push_str(annotator.annotation_type());
        self.annotators.push(Box::new(annotator));
        self
    }

    pub fn len(&self) -> usize {
        self.annotators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotators.is_empty()
    }

    /// Display names of the stages, in order.
    pub fn stages(&self) -> Vec<&str> {
        self.annotators.iter().map(|a| a.display_name()).collect()
    }
}

impl Default for AnnotatorPipeline {
    fn default() -> Self {
        Self::sentence_and_token()
    }
}

impl AnalysisEngine for AnnotatorPipeline {
    fn name(&self) -> &str {
        if self.name.is_empty() {
            "empty"
        } else {
            &self.name
        }
    }

    fn span_types(&self) -> &SpanTypeRegistry {
        &self.registry
    }

    fn is_available(&self) -> bool {
        self.annotators.iter().all(|a| a.is_available())
    }

    fn availability_hint(&self) -> String {
        self.annotators
            .iter()
            .filter(|a| !a.is_available())
            .map(|a| format!("{}: {}", a.display_name(), a.availability_hint()))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn process(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError> {
        for annotator in &self.annotators {
            let before = context.span_count();
            annotator.annotate(context)?;
            debug!(
                "{} added {} spans",
                annotator.display_name(),
                context.span_count() - before
            );
        }
        Ok(())
    }
}

impl std::fmt::Debug for AnnotatorPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotatorPipeline")
            .field("stages", &self.stages())
            .field("span_types", &self.registry.names().collect::<Vec<_>>())
            .finish()
    }
}
