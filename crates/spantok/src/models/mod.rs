//! Data model shared by engines, pools and tokenizers.

mod context;
mod span;

pub(crate) use context::Lease;
pub use context::AnnotationContext;
pub use span::{Span, SpanKind};
