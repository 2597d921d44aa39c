//! Style registry: per-test stylesheet text and generated identifiers
//!
//! The registry is the explicit context object standing in for the styling
//! system's process-wide state. The host test lifecycle owns it: styling
//! evaluation appends CSS and identifiers while a test renders, `reset`
//! runs before each test case, and the serializer core only ever reads it.

use std::collections::BTreeSet;

/// Stylesheet text and generated identifiers emitted during one test run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    css: String,
    identifiers: BTreeSet<String>,
}

impl StyleRegistry {
    /// Create an empty registry. Serializing against an empty registry is
    /// a supported no-op: every rewrite pass degrades to identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered CSS and identifiers. Invoked by the host test
    /// lifecycle before each test case.
    pub fn reset(&mut self) {
        self.css.clear();
        self.identifiers.clear();
    }

    /// Append a chunk of stylesheet text. Styling evaluation emits CSS
    /// incrementally as components render.
    pub fn register_css(&mut self, css: &str) {
        if !self.css.is_empty() && !self.css.ends_with('\n') {
            self.css.push('\n');
        }
        self.css.push_str(css);
    }

    /// Record one generated class identifier emitted during the run.
    pub fn register_identifier(&mut self, identifier: impl Into<String>) {
        self.identifiers.insert(identifier.into());
    }

    /// All stylesheet text registered so far.
    pub fn stylesheet_text(&self) -> &str {
        &self.css
    }

    /// All generated identifiers registered so far.
    pub fn identifiers(&self) -> &BTreeSet<String> {
        &self.identifiers
    }

    /// Whether `token` is a registered identifier.
    pub fn contains(&self, token: &str) -> bool {
        self.identifiers.contains(token)
    }
}
