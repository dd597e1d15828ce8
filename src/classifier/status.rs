use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of risk labels a scanned value can be assigned.
///
/// Each status carries exactly one score, so a stored
/// (status, risk_score) pair can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "PQC Compliant")]
    PqcCompliant,
    #[serde(rename = "Critically Vulnerable")]
    CriticallyVulnerable,
    #[serde(rename = "Quantum Vulnerable")]
    QuantumVulnerable,
    #[serde(rename = "Active & Strong (Classical)")]
    ActiveStrongClassical,
    #[serde(rename = "Potentially Deprecated TLS Protocol")]
    DeprecatedTlsProtocol,
    #[serde(rename = "Classical ECC (Good)")]
    ClassicalEcc,
    #[serde(rename = "Outdated Library Vulnerability")]
    OutdatedLibrary,
    #[serde(rename = "Unknown/Standard")]
    UnknownStandard,
}

impl RiskStatus {
    /// Stable string form, used as the `status` column in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PqcCompliant => "PQC Compliant",
            Self::CriticallyVulnerable => "Critically Vulnerable",
            Self::QuantumVulnerable => "Quantum Vulnerable",
            Self::ActiveStrongClassical => "Active & Strong (Classical)",
            Self::DeprecatedTlsProtocol => "Potentially Deprecated TLS Protocol",
            Self::ClassicalEcc => "Classical ECC (Good)",
            Self::OutdatedLibrary => "Outdated Library Vulnerability",
            Self::UnknownStandard => "Unknown/Standard",
        }
    }

    /// The single risk score (0-100) associated with this status.
    pub fn score(&self) -> u8 {
        match self {
            Self::PqcCompliant => 20,
            Self::CriticallyVulnerable => 98,
            Self::QuantumVulnerable => 80,
            Self::ActiveStrongClassical => 30,
            Self::DeprecatedTlsProtocol => 70,
            Self::ClassicalEcc => 40,
            Self::OutdatedLibrary => 90,
            Self::UnknownStandard => 50,
        }
    }

    pub fn all() -> &'static [RiskStatus] {
        &[
            Self::PqcCompliant,
            Self::CriticallyVulnerable,
            Self::QuantumVulnerable,
            Self::ActiveStrongClassical,
            Self::DeprecatedTlsProtocol,
            Self::ClassicalEcc,
            Self::OutdatedLibrary,
            Self::UnknownStandard,
        ]
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown risk status: {s}"))
    }
}
