//! Deterministic engine for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::engine::{AnalysisEngine, AnnotationError, SpanTypeRegistry};
use crate::models::{AnnotationContext, SpanKind};

/// Splits sentences after `.`, `!` or `?` and tokens on whitespace.
///
/// Texts containing `fail_on` make `process` fail; `lemmas` and `stems`
/// are attached to matching tokens.
pub(crate) struct WhitespaceEngine {
    registry: SpanTypeRegistry,
    pub(crate) calls: AtomicUsize,
    pub(crate) available: AtomicBool,
    fail_on: Option<String>,
    lemmas: HashMap<String, String>,
    stems: HashMap<String, String>,
}

impl WhitespaceEngine {
    pub(crate) fn new() -> Self {
        let mut registry = SpanTypeRegistry::default();
        registry.register("word", SpanKind::Token);
        Self {
            registry,
            calls: AtomicUsize::new(0),
            available: AtomicBool::new(true),
            fail_on: None,
            lemmas: HashMap::new(),
            stems: HashMap::new(),
        }
    }

    pub(crate) fn failing_on(mut self, marker: &str) -> Self {
        self.fail_on = Some(marker.to_string());
        self
    }

    pub(crate) fn with_lemma(mut self, word: &str, lemma: &str) -> Self {
        self.lemmas.insert(word.to_string(), lemma.to_string());
        self
    }

    pub(crate) fn with_stem(mut self, word: &str, stem: &str) -> Self {
        self.stems.insert(word.to_string(), stem.to_string());
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AnalysisEngine for WhitespaceEngine {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn span_types(&self) -> &SpanTypeRegistry {
        &self.registry
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn availability_hint(&self) -> String {
        "test engine switched off".to_string()
    }

    fn process(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(marker) = &self.fail_on {
            if context.text().contains(marker.as_str()) {
                return Err(AnnotationError::Failed(format!("found {marker}")));
            }
        }

        let text = context.text().to_string();

        let mut start = None;
        for (i, c) in text.char_indices() {
            if start.is_none() && !c.is_whitespace() {
                start = Some(i);
            }
            if matches!(c, '.' | '!' | '?') {
                if let Some(s) = start.take() {
                    context.add_span(SpanKind::Sentence, s, i + c.len_utf8())?;
                }
            }
        }
        if let Some(s) = start {
            let end = text.trim_end().len();
            if end > s {
                context.add_span(SpanKind::Sentence, s, end)?;
            }
        }

        let mut offset = 0;
        for word in text.split_whitespace() {
            let begin = offset + text[offset..].find(word).unwrap_or(0);
            let end = begin + word.len();
            offset = end;
            let span = context.add_span(SpanKind::Token, begin, end)?;
            if let Some(lemma) = self.lemmas.get(word) {
                span.set_lemma(lemma.clone());
            }
            if let Some(stem) = self.stems.get(word) {
                span.set_stem(stem.clone());
            }
        }
        Ok(())
    }
}
