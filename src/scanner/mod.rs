use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::catalog::{Catalog, PatternRule, PatternShape};
use crate::classifier::classify;
use crate::error::{Result, ScanError};
use crate::finding::Finding;
use crate::storage::AssetStore;

/// An unclassified extraction result: the discovered key name and the raw
/// matched value, both trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key_name: String,
    pub raw_value: String,
}

/// Run one rule over the content, in first-occurrence order.
fn extract_from_rule(content: &str, rule: &PatternRule) -> Vec<Candidate> {
    rule.regex()
        .captures_iter(content)
        .map(|caps| {
            let group = |i: usize| {
                caps.get(i)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default()
            };
            match rule.shape() {
                PatternShape::ValueOnly => Candidate {
                    key_name: rule.label().to_string(),
                    raw_value: group(1),
                },
                PatternShape::KeyValue => Candidate {
                    key_name: group(1),
                    raw_value: group(2),
                },
            }
        })
        .collect()
}

/// Apply the whole catalog to the content.
///
/// Candidates come out in catalog-rule order first, match order within each
/// rule second. Nothing is deduplicated: the same value matched twice yields
/// two candidates, because the engine records raw surface signals rather
/// than a deduplicated inventory.
pub fn extract(content: &str, catalog: &Catalog) -> Vec<Candidate> {
    catalog
        .iter()
        .flat_map(|rule| extract_from_rule(content, rule))
        .collect()
}

/// Result of scanning a single file.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Findings in extraction order, ids filled in by the store.
    pub findings: Vec<Finding>,
    /// True when the source file could not be read and the scan was skipped.
    pub skipped: bool,
}

/// Drives extract -> classify -> assemble -> store for configuration files.
///
/// The catalog is supplied at construction; there is no process-wide
/// catalog state.
pub struct Scanner {
    catalog: Catalog,
}

impl Scanner {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scan one file and persist every finding.
    ///
    /// A missing or unreadable file is a recoverable condition: it is logged
    /// and reported as a skipped outcome with no findings, so multi-file
    /// runs carry on. Storage failures propagate; findings stored before the
    /// failure stay stored.
    pub fn scan_and_store(&self, path: &Path, store: &mut AssetStore) -> Result<ScanOutcome> {
        debug!(path = %path.display(), "scanning file");

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "source unavailable, skipping scan");
                return Ok(ScanOutcome {
                    findings: Vec::new(),
                    skipped: true,
                });
            }
        };

        let location = path.display().to_string();
        let mut findings = Vec::new();

        for rule in self.catalog.iter() {
            for candidate in extract_from_rule(&content, rule) {
                let classification = classify(&candidate.raw_value);
                trace!(
                    key = %candidate.key_name,
                    value = %candidate.raw_value,
                    status = %classification.status,
                    "classified candidate"
                );

                let mut finding =
                    Finding::assemble(&candidate, classification, rule.category(), &location);
                let id = store.store(&finding)?;
                finding.id = Some(id);
                findings.push(finding);
            }
        }

        debug!(path = %path.display(), count = findings.len(), "scan complete");
        Ok(ScanOutcome {
            findings,
            skipped: false,
        })
    }

    /// Scan every regular file under a directory tree.
    ///
    /// Unreadable directory entries are logged and skipped; unreadable files
    /// count as skipped outcomes per `scan_and_store`.
    pub fn scan_tree(&self, root: &Path, store: &mut AssetStore) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let outcome = self.scan_and_store(entry.path(), store)?;
            findings.extend(outcome.findings);
        }

        Ok(findings)
    }

    /// Scan a file or a directory tree, whichever the path names.
    pub fn scan_path(&self, path: &Path, store: &mut AssetStore) -> Result<Vec<Finding>> {
        if path.is_dir() {
            self.scan_tree(path, store)
        } else if path.is_file() {
            Ok(self.scan_and_store(path, store)?.findings)
        } else if !path.exists() {
            // Consistent with the single-file contract: a missing source is
            // recoverable and yields no findings.
            warn!(path = %path.display(), "source unavailable, skipping scan");
            Ok(Vec::new())
        } else {
            Err(ScanError::invalid_path(path).into())
        }
    }
}
