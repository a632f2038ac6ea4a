//! Sentence-at-a-time iteration over a corpus.
//!
//! A [`DocumentIterator`] pulls one raw document from its corpus reader,
//! runs it through the pool's engine and hands out the covered text of each
//! sentence span before pulling the next document.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::config::PipelineSettings;
use crate::corpus::{CorpusDescription, CorpusReader};
use crate::error::{PipelineError, Result};
use crate::models::SpanKind;
use crate::pool::ResourcePool;

/// Where a [`DocumentIterator`] stands between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorState {
    /// No sentences pending; the reader has more input.
    NeedsDocument,
    /// Sentences of the current document remain.
    HasSentences,
    /// Nothing pending and the reader is drained.
    Exhausted,
}

struct Cursor {
    reader: Box<dyn CorpusReader>,
    sentences: Vec<String>,
    position: usize,
    last_failure: Option<PipelineError>,
}

impl Cursor {
    fn has_pending(&self) -> bool {
        self.position < self.sentences.len()
    }

    fn record(&mut self, error: PipelineError) {
        warn!("Failed to load next document: {}", error);
        self.last_failure = Some(error);
    }

    fn reader_has_next(&mut self) -> bool {
        match self.reader.has_next() {
            Ok(more) => more,
            Err(e) => {
                self.record(PipelineError::Corpus(e));
                false
            }
        }
    }
}

/// Yields the sentences of every document in a corpus, in order.
///
/// `next_document` and `has_next` may be called from several threads; they
/// share one lock. `reset` needs exclusive access.
pub struct DocumentIterator {
    description: Box<dyn CorpusDescription>,
    pool: Arc<ResourcePool>,
    sentence_kind: SpanKind,
    cursor: Mutex<Cursor>,
}

impl DocumentIterator {
    /// Open `description` and split its documents into spans named
    /// `sentence_type`.
    pub fn new(
        description: impl CorpusDescription + 'static,
        pool: Arc<ResourcePool>,
        sentence_type: &str,
    ) -> Result<Self> {
        let sentence_kind = pool.resolve_span_type(sentence_type)?;
        let reader = description.open().map_err(PipelineError::ReaderOpen)?;
        debug!("Opened corpus: {}", description.describe());

        Ok(Self {
            description: Box::new(description),
            pool,
            sentence_kind,
            cursor: Mutex::new(Cursor {
                reader,
                sentences: Vec::new(),
                position: 0,
                last_failure: None,
            }),
        })
    }

    /// Iterator over the corpus configured in `settings`.
    pub fn from_settings(pool: Arc<ResourcePool>, settings: &PipelineSettings) -> Result<Self> {
        let corpus = settings.corpus.clone().ok_or_else(|| {
            PipelineError::InvalidArgument("no corpus configured".to_string())
        })?;
        Self::new(corpus, pool, &settings.sentence_type)
    }

    /// The next sentence, loading a new document when the current one is
    /// used up.
    ///
    /// Returns an empty string when nothing could be loaded. The cause, if
    /// any, is kept for [`take_failure`](Self::take_failure).
    pub fn next_document(&self) -> String {
        let mut cursor = self.lock();

        if !cursor.has_pending() {
            self.load_next(&mut cursor);
        }

        match cursor.sentences.get(cursor.position).cloned() {
            Some(sentence) => {
                cursor.position += 1;
                sentence
            }
            None => String::new(),
        }
    }

    fn load_next(&self, cursor: &mut Cursor) {
        cursor.sentences.clear();
        cursor.position = 0;

        let mut context = match self.pool.acquire() {
            Ok(context) => context,
            Err(e) => {
                cursor.record(e);
                return;
            }
        };

        let loaded = cursor
            .reader
            .get_next(&mut context)
            .map_err(PipelineError::from)
            .and_then(|()| self.pool.analyze(&mut context));

        match loaded {
            Ok(()) => {
                cursor.sentences = context
                    .select(&self.sentence_kind)
                    .into_iter()
                    .map(|span| context.covered_text(span).to_string())
                    .collect();
                if cursor.sentences.is_empty() {
                    warn!(
                        "No {} spans found in document {}",
                        self.sentence_kind,
                        context.source_id().unwrap_or("<unnamed>")
                    );
                } else {
                    debug!(
                        "Loaded {} sentences from document {}",
                        cursor.sentences.len(),
                        context.source_id().unwrap_or("<unnamed>")
                    );
                }
            }
            Err(e) => cursor.record(e),
        }

        self.pool.release(context);
    }

    /// Whether sentences remain in the current document or the reader has
    /// more documents. A failing reader counts as exhausted.
    pub fn has_next(&self) -> bool {
        let mut cursor = self.lock();
        cursor.has_pending() || cursor.reader_has_next()
    }

    pub fn state(&self) -> IteratorState {
        let mut cursor = self.lock();
        if cursor.has_pending() {
            IteratorState::HasSentences
        } else if cursor.reader_has_next() {
            IteratorState::NeedsDocument
        } else {
            IteratorState::Exhausted
        }
    }

    /// Close the reader and reopen the corpus from the start.
    pub fn reset(&mut self) -> Result<()> {
        let cursor = self.cursor.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = cursor.reader.close() {
            warn!("Failed to close corpus reader: {}", e);
        }

        cursor.reader = self
            .description
            .open()
            .map_err(PipelineError::ReaderReopen)?;
        cursor.sentences.clear();
        cursor.position = 0;
        cursor.last_failure = None;
        info!("Reset corpus: {}", self.description.describe());
        Ok(())
    }

    /// The most recent failure swallowed by `next_document` or `has_next`.
    pub fn take_failure(&self) -> Option<PipelineError> {
        self.lock().last_failure.take()
    }

    pub fn resource_pool(&self) -> &Arc<ResourcePool> {
        &self.pool
    }

    fn lock(&self) -> MutexGuard<'_, Cursor> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Iterator for DocumentIterator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.has_next().then(|| self.next_document())
    }
}

impl std::fmt::Debug for DocumentIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentIterator")
            .field("corpus", &self.description.describe())
            .field("sentence_kind", &self.sentence_kind)
            .field("pool", &self.pool)
            .finish()
    }
}
