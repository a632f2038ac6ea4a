//! Corpus readers.
//!
//! A [`CorpusDescription`] says where documents come from and can open a
//! fresh [`CorpusReader`] positioned at the first document any number of
//! times. Readers copy one raw document at a time into an
//! [`AnnotationContext`](crate::models::AnnotationContext).

mod files;
mod jsonl;
mod memory;
mod reader;

pub use files::FileListReader;
pub use jsonl::{JsonlDocument, JsonlReader};
pub use memory::MemoryReader;
pub use reader::{CorpusDescription, CorpusError, CorpusReader, ReaderDescription};
