//! Reader traits and the serializable reader description.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::AnnotationContext;

use super::files::FileListReader;
use super::jsonl::JsonlReader;
use super::memory::MemoryReader;

/// Errors raised by corpus readers.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed corpus record: {0}")]
    Json(#[from] serde_json::Error),

    /// `get_next` was called with no documents left.
    #[error("Corpus has no more documents")]
    Exhausted,

    #[error("Corpus reader is closed")]
    Closed,
}

/// Sequential source of raw documents.
pub trait CorpusReader: Send {
    /// Whether another document is available.
    fn has_next(&mut self) -> Result<bool, CorpusError>;

    /// Load the next document's text (and source id, when known) into
    /// `context`, replacing whatever it held.
    fn get_next(&mut self, context: &mut AnnotationContext) -> Result<(), CorpusError>;

    /// Release underlying handles. Further reads fail with [`CorpusError::Closed`].
    fn close(&mut self) -> Result<(), CorpusError>;
}

/// Recipe for opening a [`CorpusReader`] at the start of a corpus.
pub trait CorpusDescription: Send + Sync {
    fn open(&self) -> Result<Box<dyn CorpusReader>, CorpusError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

/// Built-in reader descriptions, loadable from configuration.
///
/// ```toml
/// [corpus]
/// kind = "jsonl"
/// path = "corpus.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReaderDescription {
    /// Documents held in memory.
    Memory { documents: Vec<String> },
    /// One document per file, read as UTF-8 in the given order.
    Files { paths: Vec<PathBuf> },
    /// Line-delimited JSON with `id` and `text` fields.
    Jsonl { path: PathBuf },
}

impl CorpusDescription for ReaderDescription {
    fn open(&self) -> Result<Box<dyn CorpusReader>, CorpusError> {
        Ok(match self {
            ReaderDescription::Memory { documents } => {
                Box::new(MemoryReader::new(documents.clone()))
            }
            ReaderDescription::Files { paths } => Box::new(FileListReader::open(paths.clone())?),
            ReaderDescription::Jsonl { path } => Box::new(JsonlReader::open(path)?),
        })
    }

    fn describe(&self) -> String {
        match self {
            ReaderDescription::Memory { documents } => {
                format!("{} in-memory documents", documents.len())
            }
            ReaderDescription::Files { paths } => format!("{} files", paths.len()),
            ReaderDescription::Jsonl { path } => format!("JSONL corpus {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_from_toml() {
        let desc: ReaderDescription =
            toml::from_str("kind = \"files\"\npaths = [\"a.txt\", \"b.txt\"]").unwrap();
        assert_eq!(
            desc,
            ReaderDescription::Files {
                paths: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            }
        );
        assert_eq!(desc.describe(), "2 files");
    }

    #[test]
    fn test_memory_description_opens_fresh_readers() {
        let desc = ReaderDescription::Memory {
            documents: vec!["one".into()],
        };
        let mut ctx = AnnotationContext::default();

        let mut first = desc.open().unwrap();
        first.get_next(&mut ctx).unwrap();
        assert!(!first.has_next().unwrap());

        let mut second = desc.open().unwrap();
        assert!(second.has_next().unwrap());
    }

    #[test]
    fn test_missing_jsonl_fails_to_open() {
        let desc = ReaderDescription::Jsonl {
            path: PathBuf::from("/nonexistent/corpus.jsonl"),
        };
        assert!(matches!(desc.open(), Err(CorpusError::Io(_))));
    }
}
