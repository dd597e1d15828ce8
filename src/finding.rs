use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::{Classification, RiskStatus};
use crate::scanner::Candidate;

/// Owner attribution stamped on scanner-produced findings until a team
/// claims them.
pub const OWNER_NEEDS_REVIEW: &str = "Discovered by scanner (Review Needed)";

/// Origin tag recorded in every finding's metadata.
pub const SOURCE_SCANNER: &str = "crypto-asset-scanner file scanner";

/// Structured metadata carried alongside each finding, stored as a JSON
/// blob and deserialized transparently on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingMetadata {
    pub category: String,
    pub risk_score: u8,
    pub raw_match: String,
    pub source_scanner: String,
}

/// One discovered crypto-relevant signal with its risk classification.
///
/// `id` and `discovered_at` are assigned by the store; a finding fresh out
/// of the assembler carries neither. Findings are immutable once stored;
/// corrections are new findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Key name discovered, e.g. "SSLCertificateFile".
    pub kind: String,
    /// The raw matched value: an algorithm name, a path, free text.
    pub algorithm: String,
    /// Source file the value was extracted from.
    pub location: String,
    pub status: RiskStatus,
    pub owner_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<DateTime<Utc>>,
    pub metadata: FindingMetadata,
}

impl Finding {
    /// Merge an extraction candidate, its classification, and the source
    /// location into a storable finding.
    pub fn assemble(
        candidate: &Candidate,
        classification: Classification,
        category: &str,
        location: &str,
    ) -> Self {
        Self {
            id: None,
            kind: candidate.key_name.clone(),
            algorithm: candidate.raw_value.clone(),
            location: location.to_string(),
            status: classification.status,
            owner_team: OWNER_NEEDS_REVIEW.to_string(),
            expiration_date: None,
            discovered_at: None,
            metadata: FindingMetadata {
                category: category.to_string(),
                risk_score: classification.score,
                raw_match: candidate.raw_value.clone(),
                source_scanner: SOURCE_SCANNER.to_string(),
            },
        }
    }
}
