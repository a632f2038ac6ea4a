//! Sentence boundary detection.

use unicode_segmentation::UnicodeSegmentation;

use spantok::{AnnotationContext, AnnotationError, SpanKind};

use super::annotator::Annotator;

/// Adds a `sentence` span for every Unicode sentence (UAX #29), trimmed of
/// surrounding whitespace. Whitespace-only segments produce no span.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceAnnotator;

impl SentenceAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for SentenceAnnotator {
    fn annotation_type(&self) -> &str {
        "sentence"
    }

    fn display_name(&self) -> &str {
        "Sentence Detection"
    }

    fn annotate(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError> {
        let ranges = sentence_ranges(context.text());
        for (start, end) in ranges {
            context.add_span(SpanKind::Sentence, start, end)?;
        }
        Ok(())
    }
}

fn sentence_ranges(text: &str) -> Vec<(usize, usize)> {
    text.split_sentence_bound_indices()
        .filter_map(|(offset, sentence)| {
            let trimmed = sentence.trim();
            if trimmed.is_empty() {
                return None;
            }
            let start = offset + (sentence.len() - sentence.trim_start().len());
            Some((start, start + trimmed.len()))
        })
        .collect()
}
