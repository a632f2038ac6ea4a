//! Pipeline settings loaded from TOML, YAML or JSON, with environment
//! overrides.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::corpus::ReaderDescription;
use crate::error::{PipelineError, Result};
use crate::pool::PoolConfig;

/// Default span type name for sentences.
pub const DEFAULT_SENTENCE_TYPE: &str = "sentence";

/// Settings shared by the tokenizer factory and the document iterator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Span type the document iterator splits documents into.
    pub sentence_type: String,
    /// Span type tokenizers read. `None` selects lexical tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Drop `<TAG>`/`</TAG>` label tokens from lexical token streams.
    pub check_for_label: bool,
    pub pool: PoolConfig,
    /// Corpus for the document iterator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<ReaderDescription>,
    /// Snowball language name for the stem annotator (e.g. "english").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_language: Option<String>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            sentence_type: DEFAULT_SENTENCE_TYPE.to_string(),
            token_type: None,
            check_for_label: true,
            pool: PoolConfig::default(),
            corpus: None,
            stem_language: None,
        }
    }
}

impl PipelineSettings {
    /// Load settings from a file, choosing the format by extension:
    /// `.toml`, `.yaml`/`.yml`, anything else as JSON.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)
                .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))?,
        };
        debug!("Loaded pipeline settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PipelineError::Config(e.to_string()))
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(name) = non_empty_var("SPANTOK_SENTENCE_TYPE") {
            self.sentence_type = name;
        }

        if let Some(name) = non_empty_var("SPANTOK_TOKEN_TYPE") {
            self.token_type = Some(name);
        }

        // SPANTOK_CHECK_FOR_LABEL=0 keeps label tokens
        if let Some(raw) = non_empty_var("SPANTOK_CHECK_FOR_LABEL") {
            match parse_flag(&raw) {
                Some(flag) => self.check_for_label = flag,
                None => warn!("Ignoring invalid SPANTOK_CHECK_FOR_LABEL value: {}", raw),
            }
        }

        if let Some(raw) = non_empty_var("SPANTOK_MAX_CONTEXTS") {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => self.pool.max_contexts = n,
                _ => warn!("Ignoring invalid SPANTOK_MAX_CONTEXTS value: {}", raw),
            }
        }

        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
