//! Annotation context: the analyzed form of one unit of text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::engine::AnnotationError;

use super::span::{Span, SpanKind};

/// Pool slot held by a checked-out context.
#[derive(Debug)]
pub(crate) struct Lease {
    pub(crate) pool_id: u64,
    pub(crate) in_use: Arc<AtomicUsize>,
}

/// Text buffer plus the spans an engine discovered in it.
///
/// Contexts handed out by a [`ResourcePool`](crate::pool::ResourcePool) must
/// go back through `release()`. Dropping one instead logs a warning and frees
/// the pool slot.
#[derive(Debug, Default)]
pub struct AnnotationContext {
    text: String,
    source_id: Option<String>,
    spans: Vec<Span>,
    pub(crate) lease: Option<Lease>,
}

impl AnnotationContext {
    /// Create a context outside of any pool.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_id: None,
            spans: Vec::new(),
            lease: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text buffer. Existing spans are discarded.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.spans.clear();
    }

    /// Identifier of the corpus document that populated this context.
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    pub fn set_source_id(&mut self, id: impl Into<String>) {
        self.source_id = Some(id.into());
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Record a span over `start..end`.
    ///
    /// Offsets must be in bounds and fall on UTF-8 character boundaries.
    pub fn add_span(
        &mut self,
        kind: SpanKind,
        start: usize,
        end: usize,
    ) -> Result<&mut Span, AnnotationError> {
        if start > end || self.text.get(start..end).is_none() {
            return Err(AnnotationError::InvalidSpan {
                kind: kind.name().to_string(),
                start,
                end,
                len: self.text.len(),
            });
        }
        self.spans.push(Span::new(kind, start, end));
        let last = self.spans.len() - 1;
        Ok(&mut self.spans[last])
    }

    /// Spans of `kind` in document order.
    pub fn select(&self, kind: &SpanKind) -> Vec<&Span> {
        let mut selected: Vec<&Span> = self.spans.iter().filter(|s| s.kind() == kind).collect();
        selected.sort_by_key(|s| (s.start(), s.end()));
        selected
    }

    /// Spans of `kind` paired with their covered text, for annotators that
    /// enrich existing spans (stems, lemmas).
    pub fn select_mut<'a>(
        &'a mut self,
        kind: &'a SpanKind,
    ) -> impl Iterator<Item = (&'a str, &'a mut Span)> + 'a {
        let text = self.text.as_str();
        self.spans
            .iter_mut()
            .filter(move |s| s.kind() == kind)
            .map(move |s| (&text[s.start()..s.end()], s))
    }

    /// Text covered by `span`; empty if the span does not belong to this text.
    pub fn covered_text(&self, span: &Span) -> &str {
        self.text.get(span.start()..span.end()).unwrap_or("")
    }

    /// Reset to an empty buffer so the context can be reused.
    pub fn clear(&mut self) {
        self.text.clear();
        self.source_id = None;
        self.spans.clear();
    }
}

impl Drop for AnnotationContext {
    fn drop(&mut self) {
        if let Some(lease) = self.lease.take() {
            lease.in_use.fetch_sub(1, Ordering::AcqRel);
            tracing::warn!(
                "AnnotationContext dropped without being released (source: {})",
                self.source_id.as_deref().unwrap_or("<none>")
            );
        }
    }
}
