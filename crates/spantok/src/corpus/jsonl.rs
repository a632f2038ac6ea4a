//! Line-delimited JSON corpus.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::AnnotationContext;

use super::reader::{CorpusError, CorpusReader};

/// A single document from a JSONL corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonlDocument {
    /// Unique document identifier.
    pub id: String,
    /// Raw text content of the document.
    pub text: String,
}

/// Reads `{"id": ..., "text": ...}` records, one per line. Blank lines are
/// skipped.
///
/// A line that cannot be read or parsed still counts as a record: `has_next`
/// reports it, and the `get_next` that reaches it fails with the parse or
/// I/O error and moves past it. Later records stay readable.
#[derive(Debug)]
pub struct JsonlReader {
    lines: Option<Lines<BufReader<File>>>,
    peeked: Option<Result<JsonlDocument, CorpusError>>,
}

impl JsonlReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: Some(BufReader::new(file).lines()),
            peeked: None,
        })
    }

    fn fill(&mut self) {
        if self.peeked.is_some() {
            return;
        }
        let Some(lines) = self.lines.as_mut() else {
            return;
        };
        for line in lines.by_ref() {
            let record = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => serde_json::from_str(&line).map_err(CorpusError::from),
                Err(e) => Err(CorpusError::from(e)),
            };
            self.peeked = Some(record);
            break;
        }
    }
}

impl CorpusReader for JsonlReader {
    fn has_next(&mut self) -> Result<bool, CorpusError> {
        self.fill();
        Ok(self.peeked.is_some())
    }

    fn get_next(&mut self, context: &mut AnnotationContext) -> Result<(), CorpusError> {
        if self.lines.is_none() {
            return Err(CorpusError::Closed);
        }
        self.fill();
        let doc = self.peeked.take().ok_or(CorpusError::Exhausted)??;
        context.set_text(doc.text);
        context.set_source_id(doc.id);
        Ok(())
    }

    fn close(&mut self) -> Result<(), CorpusError> {
        self.lines = None;
        self.peeked = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_reads_records_and_skips_blank_lines() {
        let file = corpus(&[
            r#"{"id": "d1", "text": "Dogs bark."}"#,
            "",
            r#"{"id": "d2", "text": "Cats meow."}"#,
        ]);
        let mut reader = JsonlReader::open(file.path()).unwrap();
        let mut ctx = AnnotationContext::default();

        assert!(reader.has_next().unwrap());
        reader.get_next(&mut ctx).unwrap();
        assert_eq!(ctx.text(), "Dogs bark.");
        assert_eq!(ctx.source_id(), Some("d1"));

        reader.get_next(&mut ctx).unwrap();
        assert_eq!(ctx.source_id(), Some("d2"));
        assert!(!reader.has_next().unwrap());
        assert!(matches!(
            reader.get_next(&mut ctx),
            Err(CorpusError::Exhausted)
        ));
    }

    #[test]
    fn test_malformed_line_fails_once_then_reading_continues() {
        let file = corpus(&[
            r#"{"id": "a", "text": "First."}"#,
            "not json",
            r#"{"id": "c", "text": "Third."}"#,
        ]);
        let mut reader = JsonlReader::open(file.path()).unwrap();
        let mut ctx = AnnotationContext::default();

        reader.get_next(&mut ctx).unwrap();
        assert_eq!(ctx.source_id(), Some("a"));

        assert!(reader.has_next().unwrap());
        assert!(reader.has_next().unwrap());
        assert!(matches!(
            reader.get_next(&mut ctx),
            Err(CorpusError::Json(_))
        ));

        assert!(reader.has_next().unwrap());
        reader.get_next(&mut ctx).unwrap();
        assert_eq!(ctx.text(), "Third.");
        assert!(!reader.has_next().unwrap());
    }

    #[test]
    fn test_close() {
        let file = corpus(&[r#"{"id": "d1", "text": "x"}"#]);
        let mut reader = JsonlReader::open(file.path()).unwrap();
        reader.close().unwrap();
        assert!(!reader.has_next().unwrap());
        let mut ctx = AnnotationContext::default();
        assert!(matches!(reader.get_next(&mut ctx), Err(CorpusError::Closed)));
    }
}
