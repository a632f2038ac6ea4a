//! Pipeline error types.

use thiserror::Error;

use crate::corpus::CorpusError;
use crate::engine::AnnotationError;

/// Errors surfaced by the pool, tokenizers, factory and document iterator.
///
/// Empty results (zero tokens, zero sentences) are never errors; they are
/// reported through `tracing` warnings and must be detected from counts.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Missing input or an unresolvable span type name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// The engine could not hand out an analysis context.
    #[error("Analysis engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The engine failed while analyzing text.
    #[error("Analysis failed: {0}")]
    AnalysisFailure(#[from] AnnotationError),

    #[error("Token index {index} out of range ({len} tokens)")]
    OutOfRange { index: usize, len: usize },

    #[error("Failed to open corpus reader: {0}")]
    ReaderOpen(#[source] CorpusError),

    #[error("Failed to reopen corpus reader: {0}")]
    ReaderReopen(#[source] CorpusError),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Whether this error means the caller passed bad input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PipelineError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
