//! spantok-annotate - built-in annotators and the default analysis engine.
//!
//! Annotators each add or enrich one kind of span. An [`AnnotatorPipeline`]
//! runs them in order and is the [`AnalysisEngine`](spantok::AnalysisEngine)
//! that a [`ResourcePool`](spantok::ResourcePool) drives.

pub mod annotation;
pub mod defaults;

pub use annotation::{
    Annotator, AnnotatorPipeline, LemmaAnnotator, SentenceAnnotator, StemAnnotator,
    TokenAnnotator,
};
pub use defaults::{default_analysis_engine, default_resource_pool, default_tokenizer_factory};
