//! Forward-only token cursor over one analyzed text unit.

use std::fmt;
use std::io::Read;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::error::{PipelineError, Result};
use crate::models::{AnnotationContext, SpanKind};
use crate::pool::ResourcePool;

use super::preprocess::TokenPreProcess;

/// Bare markup labels such as `<NAME>` or `</NAME>`.
static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</?[A-Z]+>$").expect("label pattern should compile"));

/// Which spans become tokens, and how a token's value is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSelection {
    /// `token` spans; value is the lemma, else the stem, else the covered
    /// text. With `check_for_label`, spans covering a bare markup label are
    /// skipped.
    Lexical { check_for_label: bool },
    /// Spans of the named type; value is always the covered text.
    SpanType(String),
}

impl Default for TokenSelection {
    fn default() -> Self {
        TokenSelection::Lexical {
            check_for_label: true,
        }
    }
}

/// Ordered tokens of one text unit, read through a cursor.
///
/// The token list is built once, when the tokenizer is constructed; the
/// analysis context is released before the constructor returns. Reading
/// applies the current pre-processor and advances the cursor; there is no
/// way to rewind.
pub struct Tokenizer {
    tokens: Vec<String>,
    index: usize,
    pre_process: Option<Arc<dyn TokenPreProcess>>,
}

impl Tokenizer {
    /// Analyze `text` and collect tokens per `selection`.
    pub fn build(text: &str, pool: &ResourcePool, selection: &TokenSelection) -> Result<Self> {
        let kind = selection_kind(pool, selection)?;
        let context = pool.process(text)?;
        Ok(Self::from_context(pool, context, &kind, selection))
    }

    /// Lexical tokens of `text` (lemma, else stem, else covered text).
    pub fn new(text: &str, pool: &ResourcePool, check_for_label: bool) -> Result<Self> {
        Self::build(text, pool, &TokenSelection::Lexical { check_for_label })
    }

    /// Covered text of every span of type `span_type` in `text`.
    pub fn with_span_type(text: &str, pool: &ResourcePool, span_type: &str) -> Result<Self> {
        debug!("Tokenizing string into {} spans", span_type);
        Self::build(text, pool, &TokenSelection::SpanType(span_type.to_string()))
    }

    /// Covered text of every span of type `span_type` in a UTF-8 byte stream.
    pub fn from_reader<R: Read>(reader: R, pool: &ResourcePool, span_type: &str) -> Result<Self> {
        debug!("Tokenizing stream into {} spans", span_type);
        let selection = TokenSelection::SpanType(span_type.to_string());
        let kind = selection_kind(pool, &selection)?;
        let context = pool.process_reader(reader)?;
        Ok(Self::from_context(pool, context, &kind, &selection))
    }

    /// Wrap an already resolved token list.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            index: 0,
            pre_process: None,
        }
    }

    fn from_context(
        pool: &ResourcePool,
        context: AnnotationContext,
        kind: &SpanKind,
        selection: &TokenSelection,
    ) -> Self {
        let tokens = collect_tokens(&context, kind, selection);
        pool.release(context);

        if tokens.is_empty() {
            warn!("Failed to get any {} tokens", kind);
        }
        Self::from_tokens(tokens)
    }

    pub fn has_more_tokens(&self) -> bool {
        self.index < self.tokens.len()
    }

    /// Total number of tokens, regardless of the cursor.
    pub fn count_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens not yet read.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.index
    }

    /// Read the token under the cursor and advance.
    pub fn next_token(&mut self) -> Result<String> {
        let raw = self.tokens.get(self.index).ok_or(PipelineError::OutOfRange {
            index: self.index,
            len: self.tokens.len(),
        })?;
        self.index += 1;

        let token = match &self.pre_process {
            Some(p) => p.pre_process(raw),
            None => raw.clone(),
        };
        trace!("next_token() of: {}", token);
        Ok(token)
    }

    /// Read every remaining token. A second call returns nothing.
    pub fn get_tokens(&mut self) -> Vec<String> {
        self.by_ref().collect()
    }

    /// Replace the pre-processor used by later reads.
    pub fn set_token_pre_processor(&mut self, pre_process: Option<Arc<dyn TokenPreProcess>>) {
        self.pre_process = pre_process;
    }

    pub fn token_pre_processor(&self) -> Option<&Arc<dyn TokenPreProcess>> {
        self.pre_process.as_ref()
    }
}

impl Iterator for Tokenizer {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_token().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Tokenizer {}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("tokens", &self.tokens)
            .field("index", &self.index)
            .field("pre_process", &self.pre_process.is_some())
            .finish()
    }
}

fn selection_kind(pool: &ResourcePool, selection: &TokenSelection) -> Result<SpanKind> {
    match selection {
        TokenSelection::Lexical { .. } => Ok(SpanKind::Token),
        TokenSelection::SpanType(name) => pool.resolve_span_type(name),
    }
}

fn collect_tokens(
    context: &AnnotationContext,
    kind: &SpanKind,
    selection: &TokenSelection,
) -> Vec<String> {
    context
        .select(kind)
        .into_iter()
        .filter_map(|span| {
            let covered = context.covered_text(span);
            match selection {
                TokenSelection::Lexical { check_for_label } => {
                    if *check_for_label && is_label(covered) {
                        return None;
                    }
                    let value = span.lemma().or(span.stem()).unwrap_or(covered);
                    Some(value.to_string())
                }
                TokenSelection::SpanType(_) => Some(covered.to_string()),
            }
        })
        .collect()
}

fn is_label(text: &str) -> bool {
    LABEL_PATTERN.is_match(text)
}
