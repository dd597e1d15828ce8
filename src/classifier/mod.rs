mod status;

pub use status::RiskStatus;

/// Result of risk assessment for one extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: RiskStatus,
    pub score: u8,
}

impl Classification {
    fn of(status: RiskStatus) -> Self {
        Self {
            status,
            score: status.score(),
        }
    }
}

struct RiskRule {
    status: RiskStatus,
    /// Predicate over the lowercased value.
    applies: fn(&str) -> bool,
}

/// Ordered priority chain: the first rule whose predicate holds wins, later
/// rules are never consulted. A value containing both "kyber" and "rsa-1024"
/// is therefore PQC Compliant. Reordering this table changes observable
/// classifications, so the order itself is pinned by tests.
const RISK_CHAIN: &[RiskRule] = &[
    RiskRule {
        status: RiskStatus::PqcCompliant,
        applies: |v| v.contains("kyber") || v.contains("dilithium"),
    },
    RiskRule {
        status: RiskStatus::CriticallyVulnerable,
        applies: |v| {
            v.contains("rsa-1024") || v.contains("sha-1") || v.contains("old_rsa_1024")
        },
    },
    RiskRule {
        status: RiskStatus::QuantumVulnerable,
        applies: |v| v.contains("rsa"),
    },
    RiskRule {
        status: RiskStatus::ActiveStrongClassical,
        applies: |v| v.contains("aes") && v.contains("gcm"),
    },
    // Deliberately the literal legacy predicate: "sslproto" contains "ssl",
    // so any SSLProtocol directive value trips this rule regardless of the
    // TLS versions it names.
    RiskRule {
        status: RiskStatus::DeprecatedTlsProtocol,
        applies: |v| v.contains("sslproto") && (v.contains("ssl") || !v.contains("tls")),
    },
    RiskRule {
        status: RiskStatus::ClassicalEcc,
        applies: |v| v.contains("ecdhe"),
    },
    RiskRule {
        status: RiskStatus::OutdatedLibrary,
        applies: |v| v.contains("openssl_0.9.8"),
    },
];

/// Assess the risk of a raw extracted value.
///
/// Total over all strings: every input maps to exactly one
/// (status, score) pair, with Unknown/Standard as the fallback.
pub fn classify(value: &str) -> Classification {
    let lowered = value.to_lowercase();
    RISK_CHAIN
        .iter()
        .find(|rule| (rule.applies)(&lowered))
        .map(|rule| Classification::of(rule.status))
        .unwrap_or_else(|| Classification::of(RiskStatus::UnknownStandard))
}
