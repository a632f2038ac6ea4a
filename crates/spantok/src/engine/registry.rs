//! Span type registry mapping span type names to [`SpanKind`]s.

use std::collections::BTreeMap;

use crate::models::SpanKind;

/// Name → kind lookup used to resolve configured span types.
///
/// Names are matched case-insensitively after trimming. A fresh registry
/// (`default()`) knows `sentence` and `token`.
#[derive(Debug, Clone)]
pub struct SpanTypeRegistry {
    kinds: BTreeMap<String, SpanKind>,
}

impl SpanTypeRegistry {
    /// A registry with no names at all.
    pub fn empty() -> Self {
        Self {
            kinds: BTreeMap::new(),
        }
    }

    /// Register `name` (and any later alias) for `kind`.
    pub fn register(&mut self, name: &str, kind: SpanKind) -> &mut Self {
        self.kinds.insert(normalize(name), kind);
        self
    }

    /// Register a custom kind and return it.
    ///
    /// The kind keeps `name` as given (trimmed), so an annotator may emit
    /// `SpanKind::Custom(name)` directly; lookups by name stay
    /// case-insensitive.
    pub fn register_custom(&mut self, name: &str) -> SpanKind {
        let kind = SpanKind::Custom(name.trim().to_string());
        self.register(name, kind.clone());
        kind
    }

    pub fn resolve(&self, name: &str) -> Option<SpanKind> {
        self.kinds.get(&normalize(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(&normalize(name))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    /// Copy every name from `other` into this registry.
    pub fn merge(&mut self, other: &SpanTypeRegistry) {
        for (name, kind) in &other.kinds {
            self.kinds.insert(name.clone(), kind.clone());
        }
    }
}

impl Default for SpanTypeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("sentence", SpanKind::Sentence)
            .register("token", SpanKind::Token);
        registry
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
