use super::{PatternRule, PatternShape};
use crate::error::CatalogError;

/// The default rule set, in extraction order: file-path directives first,
/// then algorithm identifiers, then protocol and cipher configuration.
pub fn builtin_rules() -> Result<Vec<PatternRule>, CatalogError> {
    Ok(vec![
        PatternRule::new(
            "CertFile",
            r"(SSLCertificateFile|LEGACY_APP_CERT)\s*(.*)",
            "Certificate Path",
            PatternShape::KeyValue,
        )?,
        PatternRule::new(
            "KeyFile",
            r"(SSLCertificateKeyFile|DB_ENCRYPTION_KEY_PATH|SSH_HOST_KEY)\s*(.*)",
            "Key Path",
            PatternShape::KeyValue,
        )?,
        PatternRule::new(
            "PQC_ENCRYPTION_ID",
            r"PQC_ENCRYPTION_KEY_ID=(.*)",
            "PQC Key ID",
            PatternShape::ValueOnly,
        )?,
        PatternRule::new(
            "PQC_SIGNING_ID",
            r"PQC_SIGNING_KEY_ID=(.*)",
            "PQC Signature ID",
            PatternShape::ValueOnly,
        )?,
        PatternRule::new(
            "DB_ENCRYPTION_ALGO",
            r"DB_ENCRYPTION_ALGORITHM=(.*)",
            "Database Encryption",
            PatternShape::ValueOnly,
        )?,
        PatternRule::new(
            "LegacyCryptoLib",
            r"LEGACY_APP_CRYPTO_LIB=(.*)",
            "Crypto Library",
            PatternShape::ValueOnly,
        )?,
        PatternRule::new(
            "SSLProtocol_Config",
            r"SSLProtocol\s*(.*)",
            "TLS/SSL Protocol",
            PatternShape::ValueOnly,
        )?,
        PatternRule::new(
            "SSLCipherSuite_Config",
            r"SSLCipherSuite\s*(.*)",
            "Cipher Suite Configuration",
            PatternShape::ValueOnly,
        )?,
    ])
}
