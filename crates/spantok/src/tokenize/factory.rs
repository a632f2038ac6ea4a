//! Tokenizer factory binding a pool, a pre-processor and a span selection.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use tracing::debug;

use crate::config::PipelineSettings;
use crate::engine::AnalysisEngine;
use crate::error::{PipelineError, Result};
use crate::pool::ResourcePool;

use super::preprocess::TokenPreProcess;
use super::tokenizer::{TokenSelection, Tokenizer};

/// Mints [`Tokenizer`]s that share one [`ResourcePool`].
///
/// Without an explicit span type, tokenizers use lexical `token` spans
/// (label checking on by default). With one, they use the covered text of
/// spans of that type, and byte-stream input becomes available.
#[derive(Clone)]
pub struct TokenizerFactory {
    pool: Arc<ResourcePool>,
    check_for_label: bool,
    span_type: Option<String>,
    pre_process: Option<Arc<dyn TokenPreProcess>>,
}

impl TokenizerFactory {
    pub fn new(pool: Arc<ResourcePool>) -> Self {
        Self {
            pool,
            check_for_label: true,
            span_type: None,
            pre_process: None,
        }
    }

    /// Wrap `engine` in a default-sized pool.
    pub fn with_engine(engine: Arc<dyn AnalysisEngine>) -> Self {
        Self::new(Arc::new(ResourcePool::new(engine)))
    }

    /// Factory configured from settings (`token_type`, `check_for_label`).
    pub fn from_settings(pool: Arc<ResourcePool>, settings: &PipelineSettings) -> Self {
        let factory = Self::new(pool).with_check_for_label(settings.check_for_label);
        match &settings.token_type {
            Some(name) => factory.with_span_type(name.clone()),
            None => factory,
        }
    }

    pub fn with_check_for_label(mut self, check_for_label: bool) -> Self {
        self.check_for_label = check_for_label;
        self
    }

    pub fn with_span_type(mut self, span_type: impl Into<String>) -> Self {
        self.span_type = Some(span_type.into());
        self
    }

    pub fn with_pre_processor(mut self, pre_process: impl TokenPreProcess + 'static) -> Self {
        self.pre_process = Some(Arc::new(pre_process));
        self
    }

    /// The selection handed to every tokenizer this factory creates.
    pub fn selection(&self) -> TokenSelection {
        match &self.span_type {
            Some(name) => TokenSelection::SpanType(name.clone()),
            None => TokenSelection::Lexical {
                check_for_label: self.check_for_label,
            },
        }
    }

    /// Tokenize `text`. `None` is rejected before the engine is touched.
    pub fn create<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<Tokenizer> {
        debug!("Tokenizing string");
        let text = text.into().ok_or_else(|| {
            PipelineError::InvalidArgument("no text to tokenize".to_string())
        })?;
        let mut tokenizer = Tokenizer::build(text, &self.pool, &self.selection())?;
        tokenizer.set_token_pre_processor(self.pre_process.clone());
        Ok(tokenizer)
    }

    /// Tokenize a UTF-8 byte stream. Requires an explicit span type.
    pub fn create_from_reader<R: Read>(&self, reader: Option<R>) -> Result<Tokenizer> {
        debug!("Tokenizing stream");
        let reader = reader.ok_or_else(|| {
            PipelineError::InvalidArgument("no input stream to tokenize".to_string())
        })?;
        let span_type = self.span_type.as_deref().ok_or_else(|| {
            PipelineError::Unsupported(
                "stream tokenization requires an explicit span type".to_string(),
            )
        })?;
        let mut tokenizer = Tokenizer::from_reader(reader, &self.pool, span_type)?;
        tokenizer.set_token_pre_processor(self.pre_process.clone());
        Ok(tokenizer)
    }

    pub fn resource_pool(&self) -> &Arc<ResourcePool> {
        &self.pool
    }

    pub fn set_token_pre_processor(&mut self, pre_process: Option<Arc<dyn TokenPreProcess>>) {
        self.pre_process = pre_process;
    }

    /// The pre-processor applied to created tokenizers, if any.
    pub fn token_pre_processor(&self) -> Option<&Arc<dyn TokenPreProcess>> {
        self.pre_process.as_ref()
    }
}

impl fmt::Debug for TokenizerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerFactory")
            .field("pool", &self.pool)
            .field("selection", &self.selection())
            .field("pre_process", &self.pre_process.is_some())
            .finish()
    }
}
