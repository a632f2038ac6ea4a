//! Snowball stemming of token spans.

use rust_stemmers::{Algorithm, Stemmer};

use spantok::{AnnotationContext, AnnotationError, SpanKind};

use super::annotator::Annotator;

/// Fills [`Span::stem`](spantok::Span::stem) on every `token` span with the
/// Snowball stem of its lowercased text. Tokens without alphanumeric
/// characters are left alone.
pub struct StemAnnotator {
    language: String,
    stemmer: Stemmer,
}

impl StemAnnotator {
    pub fn english() -> Self {
        Self {
            language: "english".to_string(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Stemmer for a Snowball language name such as "english" or "german".
    pub fn for_language(name: &str) -> Result<Self, AnnotationError> {
        let language = name.trim().to_lowercase();
        let algorithm = algorithm_for(&language).ok_or_else(|| {
            AnnotationError::BackendNotAvailable(format!("no Snowball stemmer for '{}'", name))
        })?;
        Ok(Self {
            language,
            stemmer: Stemmer::create(algorithm),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

fn algorithm_for(language: &str) -> Option<Algorithm> {
    Some(match language {
        "arabic" => Algorithm::Arabic,
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "greek" => Algorithm::Greek,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "tamil" => Algorithm::Tamil,
        "turkish" => Algorithm::Turkish,
        _ => return None,
    })
}

impl Annotator for StemAnnotator {
    fn annotation_type(&self) -> &str {
        "stem"
    }

    fn display_name(&self) -> &str {
        "Stemming"
    }

    fn annotate(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError> {
        for (covered, span) in context.select_mut(&SpanKind::Token) {
            if !covered.chars().any(char::is_alphanumeric) {
                continue;
            }
            let stem = self.stemmer.stem(&covered.to_lowercase()).into_owned();
            span.set_stem(stem);
        }
        Ok(())
    }
}

impl std::fmt::Debug for StemAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemAnnotator")
            .field("language", &self.language)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::TokenAnnotator;

    fn stems(annotator: &StemAnnotator, text: &str) -> Vec<Option<String>> {
        let mut ctx = AnnotationContext::new(text);
        TokenAnnotator.annotate(&mut ctx).unwrap();
        annotator.annotate(&mut ctx).unwrap();
        ctx.select(&SpanKind::Token)
            .into_iter()
            .map(|s| s.stem().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_english_stems() {
        let stems = stems(&StemAnnotator::english(), "Running dogs.");
        assert_eq!(
            stems,
            vec![Some("run".to_string()), Some("dog".to_string()), None]
        );
    }

    #[test]
    fn test_language_lookup() {
        let german = StemAnnotator::for_language(" German ").unwrap();
        assert_eq!(german.language(), "german");

        let err = StemAnnotator::for_language("klingon").unwrap_err();
        assert!(matches!(err, AnnotationError::BackendNotAvailable(_)));
    }

    #[test]
    fn test_without_tokens_is_a_no_op() {
        let mut ctx = AnnotationContext::new("nothing tokenized");
        StemAnnotator::english().annotate(&mut ctx).unwrap();
        assert_eq!(ctx.span_count(), 0);
    }
}
