//! Annotation stages behind the `Annotator` trait.
//!
//! Sentence detection and tokenization add spans; stemming and
//! lemmatization fill in values on token spans that already exist, so they
//! must run after the token stage.

mod annotator;
mod lemma;
mod pipeline;
mod sentence;
mod stem;
mod token;

pub use annotator::Annotator;
pub use lemma::LemmaAnnotator;
pub use pipeline::AnnotatorPipeline;
pub use sentence::SentenceAnnotator;
pub use stem::StemAnnotator;
pub use token::TokenAnnotator;
