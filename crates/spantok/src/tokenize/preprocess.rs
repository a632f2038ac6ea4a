//! Per-token pre-processing applied when tokens are read.

use std::sync::LazyLock;

use regex::Regex;

/// Transforms a token at read time. The stored token is never modified.
pub trait TokenPreProcess: Send + Sync {
    fn pre_process(&self, token: &str) -> String;
}

impl<F> TokenPreProcess for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn pre_process(&self, token: &str) -> String {
        self(token)
    }
}

/// Lowercases every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercasePreProcessor;

impl TokenPreProcess for LowercasePreProcessor {
    fn pre_process(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

static STRIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\d.:,"'()\[\]|/?!;]+"#).expect("strip pattern should compile")
});

/// Removes digits and common punctuation, then lowercases.
///
/// Tokens made only of stripped characters become empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonPreProcessor;

impl TokenPreProcess for CommonPreProcessor {
    fn pre_process(&self, token: &str) -> String {
        STRIP_PATTERN.replace_all(token, "").to_lowercase()
    }
}
