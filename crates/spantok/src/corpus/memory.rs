//! In-memory corpus.

use crate::models::AnnotationContext;

use super::reader::{CorpusError, CorpusReader};

/// Serves a fixed list of documents in order.
///
/// Source ids are `memory:<index>`.
#[derive(Debug, Clone)]
pub struct MemoryReader {
    documents: Vec<String>,
    position: usize,
    closed: bool,
}

impl MemoryReader {
    pub fn new(documents: Vec<String>) -> Self {
        Self {
            documents,
            position: 0,
            closed: false,
        }
    }
}

impl CorpusReader for MemoryReader {
    fn has_next(&mut self) -> Result<bool, CorpusError> {
        Ok(!self.closed && self.position < self.documents.len())
    }

    fn get_next(&mut self, context: &mut AnnotationContext) -> Result<(), CorpusError> {
        if self.closed {
            return Err(CorpusError::Closed);
        }
        let document = self
            .documents
            .get(self.position)
            .ok_or(CorpusError::Exhausted)?;
        context.set_text(document.as_str());
        context.set_source_id(format!("memory:{}", self.position));
        self.position += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), CorpusError> {
        self.closed = true;
        Ok(())
    }
}
