//! Dictionary lemmatization of token spans.

use std::collections::HashMap;
use std::sync::LazyLock;

use spantok::{AnnotationContext, AnnotationError, SpanKind};

use super::annotator::Annotator;

// ============================================================================
// Irregular English forms
// ============================================================================

static IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("does", "do"),
        ("did", "do"),
        ("done", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("ran", "run"),
        ("saw", "see"),
        ("seen", "see"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("got", "get"),
        ("made", "make"),
        ("said", "say"),
        ("thought", "think"),
        ("knew", "know"),
        ("known", "know"),
        ("came", "come"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("wrote", "write"),
        ("written", "write"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("mice", "mouse"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
    ]
    .into_iter()
    .collect()
});

/// Fills [`Span::lemma`](spantok::Span::lemma) on `token` spans whose
/// lowercased text is a known inflected form. Unknown words get no lemma,
/// so tokenizers fall back to the stem or the covered text.
#[derive(Debug, Clone, Default)]
pub struct LemmaAnnotator {
    extra: HashMap<String, String>,
}

impl LemmaAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override a form. Forms match case-insensitively.
    pub fn with_entry(mut self, form: &str, lemma: &str) -> Self {
        self.extra.insert(form.to_lowercase(), lemma.to_string());
        self
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        let key = word.to_lowercase();
        self.extra
            .get(&key)
            .map(String::as_str)
            .or_else(|| IRREGULAR_FORMS.get(key.as_str()).copied())
    }
}

impl Annotator for LemmaAnnotator {
    fn annotation_type(&self) -> &str {
        "lemma"
    }

    fn display_name(&self) -> &str {
        "Lemmatization"
    }

    fn annotate(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError> {
        for (covered, span) in context.select_mut(&SpanKind::Token) {
            if let Some(lemma) = self.lookup(covered) {
                span.set_lemma(lemma);
            }
        }
        Ok(())
    }
}
