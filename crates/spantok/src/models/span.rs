//! Span model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of an annotated span.
///
/// Engines resolve span type names to one of these through their
/// [`SpanTypeRegistry`](crate::engine::SpanTypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Sentence,
    Token,
    /// Kind contributed by a custom annotator (e.g. "noun_phrase").
    Custom(String),
}

impl SpanKind {
    pub fn name(&self) -> &str {
        match self {
            SpanKind::Sentence => "sentence",
            SpanKind::Token => "token",
            SpanKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labeled sub-range of analyzed text.
///
/// Offsets are byte offsets into the owning context's text; the covered
/// text is read back through [`AnnotationContext::covered_text`](super::AnnotationContext::covered_text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    kind: SpanKind,
    start: usize,
    end: usize,
    lemma: Option<String>,
    stem: Option<String>,
}

impl Span {
    pub(crate) fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            lemma: None,
            stem: None,
        }
    }

    pub fn kind(&self) -> &SpanKind {
        &self.kind
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn stem(&self) -> Option<&str> {
        self.stem.as_deref()
    }

    pub fn set_lemma(&mut self, lemma: impl Into<String>) {
        self.lemma = Some(lemma.into());
    }

    pub fn set_stem(&mut self, stem: impl Into<String>) {
        self.stem = Some(stem.into());
    }

    /// Whether `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
