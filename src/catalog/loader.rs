use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::{Catalog, PatternRule, PatternShape};
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[allow(dead_code)]
    version: Option<String>,
    rules: Vec<RuleSpec>,
}

#[derive(Debug, Deserialize)]
struct RuleSpec {
    label: String,
    pattern: String,
    category: String,
    shape: PatternShape,
}

impl Catalog {
    /// Load additional rules from a user-supplied JSON file.
    ///
    /// Unreadable files, malformed JSON, and patterns that fail to compile
    /// are all loud errors here rather than something a later scan trips
    /// over.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading catalog rules");

        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::catalog_file_read_error(path, e.to_string()))?;

        let file: CatalogFile = serde_json::from_str(&content)
            .map_err(|e| CatalogError::catalog_parse_error(path, e.to_string()))?;

        let rules = file
            .rules
            .into_iter()
            .map(|spec| PatternRule::new(spec.label, &spec.pattern, spec.category, spec.shape))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = rules.len(), path = %path.display(), "loaded catalog rules");
        Ok(Self::new(rules))
    }
}
