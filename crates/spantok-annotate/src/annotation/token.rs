//! Word tokenization.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use spantok::{AnnotationContext, AnnotationError, SpanKind};

use super::annotator::Annotator;

/// Inline label markup such as `<NAME>` or `</NAME>`.
static LABEL_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Z]+>").expect("label markup regex should compile"));

/// Adds a `token` span for every Unicode word boundary segment (UAX #29)
/// that is not whitespace. Punctuation marks become tokens of their own.
///
/// Label markup (`<NAME>`, `</NAME>`) is kept as a single token so that
/// lexical tokenizers can recognize and drop it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenAnnotator;

impl TokenAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for TokenAnnotator {
    fn annotation_type(&self) -> &str {
        "token"
    }

    fn display_name(&self) -> &str {
        "Tokenization"
    }

    fn annotate(&self, context: &mut AnnotationContext) -> Result<(), AnnotationError> {
        let ranges = token_ranges(context.text());
        for (start, end) in ranges {
            context.add_span(SpanKind::Token, start, end)?;
        }
        Ok(())
    }
}

fn token_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut last = 0;
    for label in LABEL_MARKUP.find_iter(text) {
        push_words(text, last, label.start(), &mut ranges);
        ranges.push((label.start(), label.end()));
        last = label.end();
    }
    push_words(text, last, text.len(), &mut ranges);
    ranges
}

fn push_words(text: &str, from: usize, to: usize, ranges: &mut Vec<(usize, usize)>) {
    for (offset, word) in text[from..to].split_word_bound_indices() {
        if word.chars().all(char::is_whitespace) {
            continue;
        }
        let start = from + offset;
        ranges.push((start, start + word.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        let mut ctx = AnnotationContext::new(text);
        TokenAnnotator.annotate(&mut ctx).unwrap();
        ctx.select(&SpanKind::Token)
            .into_iter()
            .map(|s| ctx.covered_text(s).to_string())
            .collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(tokens("Dogs bark."), vec!["Dogs", "bark", "."]);
        assert_eq!(tokens("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_contractions_and_numbers_stay_whole() {
        assert_eq!(tokens("don't pay 3.14"), vec!["don't", "pay", "3.14"]);
    }

    #[test]
    fn test_label_markup_is_one_token() {
        assert_eq!(
            tokens("<NAME>Bob</NAME> said hi"),
            vec!["<NAME>", "Bob", "</NAME>", "said", "hi"]
        );
    }

    #[test]
    fn test_lowercase_tags_are_not_labels() {
        assert_eq!(tokens("<b>"), vec!["<", "b", ">"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }
}
