mod builtin;
mod loader;

pub use builtin::builtin_rules;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::error::CatalogError;

/// Capture shape of a rule's pattern.
///
/// The shape is declared up front rather than sniffed from the match at
/// runtime, so each rule's extraction contract is statically clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternShape {
    /// One capture group: the group is the value, the rule label is the key.
    ValueOnly,
    /// Two capture groups: group 1 is the key as written, group 2 the value.
    KeyValue,
}

impl PatternShape {
    fn expected_groups(self) -> usize {
        match self {
            Self::ValueOnly => 1,
            Self::KeyValue => 2,
        }
    }
}

/// One immutable catalog entry: what to look for and how to read the match.
#[derive(Debug, Clone)]
pub struct PatternRule {
    label: String,
    regex: Regex,
    category: String,
    shape: PatternShape,
}

impl PatternRule {
    /// Compile a rule. Patterns are matched case-insensitively. A malformed
    /// pattern or a capture-group count that disagrees with `shape` is a
    /// configuration error and fails here, before any scan runs.
    pub fn new(
        label: impl Into<String>,
        pattern: &str,
        category: impl Into<String>,
        shape: PatternShape,
    ) -> Result<Self, CatalogError> {
        let label = label.into();

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| CatalogError::invalid_pattern(&label, e.to_string()))?;

        // captures_len counts the implicit whole-match group 0
        let actual = regex.captures_len() - 1;
        if actual != shape.expected_groups() {
            return Err(CatalogError::CaptureGroupMismatch {
                label,
                expected: shape.expected_groups(),
                actual,
            });
        }

        Ok(Self {
            label,
            regex,
            category: category.into(),
            shape,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn shape(&self) -> PatternShape {
        self.shape
    }
}

/// Ordered list of pattern rules. Rule order is extraction order, so a
/// catalog is built once up front and never reordered afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rules: Vec<PatternRule>,
}

impl Catalog {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// The built-in rule set covering certificate/key paths, PQC key IDs,
    /// and TLS protocol/cipher directives.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(builtin_rules()?))
    }

    /// Append rules loaded from a user-supplied JSON file after the
    /// existing ones. Later rules extract after earlier ones.
    pub fn merge(&mut self, other: Catalog) {
        self.rules.extend(other.rules);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
