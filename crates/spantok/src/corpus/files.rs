//! One document per file.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::models::AnnotationContext;

use super::reader::{CorpusError, CorpusReader};

/// Reads each file in `paths` as one UTF-8 document.
///
/// Every path must exist when the reader is opened. Source ids are the
/// file paths.
#[derive(Debug)]
pub struct FileListReader {
    paths: Vec<PathBuf>,
    position: usize,
    closed: bool,
}

impl FileListReader {
    pub fn open(paths: Vec<PathBuf>) -> Result<Self, CorpusError> {
        for path in &paths {
            fs::metadata(path)?;
        }
        Ok(Self {
            paths,
            position: 0,
            closed: false,
        })
    }
}

impl CorpusReader for FileListReader {
    fn has_next(&mut self) -> Result<bool, CorpusError> {
        Ok(!self.closed && self.position < self.paths.len())
    }

    fn get_next(&mut self, context: &mut AnnotationContext) -> Result<(), CorpusError> {
        if self.closed {
            return Err(CorpusError::Closed);
        }
        let path = self.paths.get(self.position).ok_or(CorpusError::Exhausted)?;
        // Skip past the file even when it fails to read.
        self.position += 1;
        let text = fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        context.set_text(text);
        context.set_source_id(path.display().to_string());
        Ok(())
    }

    fn close(&mut self) -> Result<(), CorpusError> {
        self.closed = true;
        Ok(())
    }
}
