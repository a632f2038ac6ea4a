//! spantok - pull-based tokenization over pluggable span annotators.
//!
//! Documents flow from a corpus reader through a [`ResourcePool`] that runs
//! an [`AnalysisEngine`] over them. [`DocumentIterator`] hands out sentences
//! one at a time; [`TokenizerFactory`] turns text into [`Tokenizer`]s.

pub mod config;
pub mod corpus;
pub mod document_iterator;
pub mod engine;
pub mod error;
pub mod models;
pub mod pool;
pub mod tokenize;

#[cfg(test)]
mod testing;

pub use config::PipelineSettings;
pub use corpus::{CorpusDescription, CorpusError, CorpusReader, ReaderDescription};
pub use document_iterator::{DocumentIterator, IteratorState};
pub use engine::{AnalysisEngine, AnnotationError, EngineCache, SpanTypeRegistry};
pub use error::{PipelineError, Result};
pub use models::{AnnotationContext, Span, SpanKind};
pub use pool::{PoolConfig, ResourcePool};
pub use tokenize::{
    CommonPreProcessor, LowercasePreProcessor, TokenPreProcess, TokenSelection, Tokenizer,
    TokenizerFactory,
};
