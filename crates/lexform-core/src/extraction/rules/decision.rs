//! Ordered keyword decision lists.

use regex::Regex;

/// Ordered `(needle, outcome)` pairs.
///
/// The first regex match in the text is lowercased and tested against each
/// needle in order; the first needle it contains wins. Later keywords in the
/// text are never considered.
#[derive(Debug)]
pub struct DecisionList<T: 'static> {
    rules: &'static [(&'static str, T)],
}

impl<T: Copy> DecisionList<T> {
    pub const fn new(rules: &'static [(&'static str, T)]) -> Self {
        Self { rules }
    }

    /// Resolve an already matched keyword.
    pub fn resolve(&self, matched: &str) -> Option<T> {
        let matched = matched.to_lowercase();
        self.rules
            .iter()
            .find(|(needle, _)| matched.contains(needle))
            .map(|(_, outcome)| *outcome)
    }

    /// Find the first match of `pattern` in `text` and resolve it.
    pub fn classify(&self, pattern: &Regex, text: &str) -> Option<T> {
        pattern.find(text).and_then(|m| self.resolve(m.as_str()))
    }
}
