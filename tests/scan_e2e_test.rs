use std::fs;
use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crypto_asset_scanner::finding::{OWNER_NEEDS_REVIEW, SOURCE_SCANNER};
use crypto_asset_scanner::{AssetStore, Catalog, RiskStatus, Scanner};

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn scanner() -> Scanner {
    Scanner::new(Catalog::builtin().unwrap())
}

#[test]
fn test_e2e_mixed_config_scan() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "enterprise.conf",
        "SSLCertificateFile /etc/ssl/old.pem\n\
         PQC_ENCRYPTION_KEY_ID=Kyber768-v1\n",
    );

    let mut store = AssetStore::open_in_memory().unwrap();
    let outcome = scanner().scan_and_store(&config, &mut store).unwrap();

    assert!(!outcome.skipped);
    assert_eq!(outcome.findings.len(), 2);

    let cert = &outcome.findings[0];
    assert_eq!(cert.kind, "SSLCertificateFile");
    assert_eq!(cert.algorithm, "/etc/ssl/old.pem");
    assert_eq!(cert.status, RiskStatus::UnknownStandard);
    assert_eq!(cert.metadata.risk_score, 50);
    assert_eq!(cert.metadata.category, "Certificate Path");

    let pqc = &outcome.findings[1];
    assert_eq!(pqc.kind, "PQC_ENCRYPTION_ID");
    assert_eq!(pqc.algorithm, "Kyber768-v1");
    assert_eq!(pqc.status, RiskStatus::PqcCompliant);
    assert_eq!(pqc.metadata.risk_score, 20);
    assert_eq!(pqc.metadata.category, "PQC Key ID");

    for finding in &outcome.findings {
        assert!(finding.id.is_some());
        assert_eq!(finding.owner_team, OWNER_NEEDS_REVIEW);
        assert_eq!(finding.expiration_date, None);
        assert_eq!(finding.location, config.display().to_string());
        assert_eq!(finding.metadata.source_scanner, SOURCE_SCANNER);
    }
}

#[test]
fn test_e2e_stored_records_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "db.env",
        "DB_ENCRYPTION_ALGORITHM=AES-256-GCM\n\
         DB_ENCRYPTION_KEY_PATH /etc/keys/db.key\n",
    );

    let mut store = AssetStore::open_in_memory().unwrap();
    let outcome = scanner().scan_and_store(&config, &mut store).unwrap();
    assert_eq!(outcome.findings.len(), 2);

    let stored = store.query_all().unwrap();
    assert_eq!(stored.len(), 2);

    // query_all is newest-first, scan order was key-path rule before the
    // algorithm rule (catalog order), so the listing is reversed
    assert_eq!(stored[0].kind, "DB_ENCRYPTION_ALGO");
    assert_eq!(stored[1].kind, "DB_ENCRYPTION_KEY_PATH");

    for finding in &stored {
        assert!(finding.discovered_at.is_some());
    }

    // Metadata survives the JSON blob round trip structurally intact
    let scanned_algo = &outcome.findings[1];
    let stored_algo = &stored[0];
    assert_eq!(stored_algo.metadata, scanned_algo.metadata);
    assert_eq!(stored_algo.id, scanned_algo.id);
}

#[test]
fn test_e2e_query_by_status() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "legacy.conf",
        "LEGACY_APP_CERT /certs/old_rsa_1024.crt\n\
         LEGACY_APP_CRYPTO_LIB=OpenSSL_0.9.8\n\
         PQC_SIGNING_KEY_ID=Dilithium3\n",
    );

    let mut store = AssetStore::open_in_memory().unwrap();
    scanner().scan_and_store(&config, &mut store).unwrap();

    let critical = store
        .query_by_status(RiskStatus::CriticallyVulnerable)
        .unwrap();
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].algorithm, "/certs/old_rsa_1024.crt");

    let outdated = store.query_by_status(RiskStatus::OutdatedLibrary).unwrap();
    assert_eq!(outdated.len(), 1);

    let pqc = store.query_by_status(RiskStatus::PqcCompliant).unwrap();
    assert_eq!(pqc.len(), 1);
    assert_eq!(pqc[0].status.score(), 20);

    let quantum = store.query_by_status(RiskStatus::QuantumVulnerable).unwrap();
    assert!(quantum.is_empty());
}

#[test]
fn test_e2e_missing_file_is_recoverable() {
    let mut store = AssetStore::open_in_memory().unwrap();
    let findings = scanner()
        .scan_path(Path::new("/nonexistent/config/dir/app.conf"), &mut store)
        .unwrap();

    assert!(findings.is_empty());
    assert!(store.query_all().unwrap().is_empty());
}

#[test]
fn test_e2e_directory_scan() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.conf", "SSLProtocol all -SSLv3\n");
    write_file(dir.path(), "b.conf", "SSH_HOST_KEY /etc/ssh/ssh_host_ed25519_key\n");
    write_file(dir.path(), "unrelated.txt", "no directives here\n");

    let mut store = AssetStore::open_in_memory().unwrap();
    let findings = scanner().scan_path(dir.path(), &mut store).unwrap();

    assert_eq!(findings.len(), 2);
    assert_eq!(store.query_all().unwrap().len(), 2);

    // Neither captured value carries a classifier trigger substring
    let unknown = store.query_by_status(RiskStatus::UnknownStandard).unwrap();
    assert_eq!(unknown.len(), 2);

    let kinds: Vec<&str> = findings.iter().map(|f| f.kind.as_str()).collect();
    assert!(kinds.contains(&"SSLProtocol_Config"));
    assert!(kinds.contains(&"SSH_HOST_KEY"));
}

#[test]
fn test_e2e_duplicate_directives_yield_duplicate_findings() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        dir.path(),
        "dup.conf",
        "SSLCipherSuite ECDHE-RSA-AES256-GCM-SHA384\n\
         SSLCipherSuite ECDHE-RSA-AES256-GCM-SHA384\n",
    );

    let mut store = AssetStore::open_in_memory().unwrap();
    let outcome = scanner().scan_and_store(&config, &mut store).unwrap();

    assert_eq!(outcome.findings.len(), 2);
    // Same surface signal twice, classified identically, stored as two rows
    assert_eq!(outcome.findings[0].algorithm, outcome.findings[1].algorithm);
    assert_ne!(outcome.findings[0].id, outcome.findings[1].id);
    // "rsa" wins over the ECDHE and AES-GCM substrings in the chain
    assert_eq!(outcome.findings[0].status, RiskStatus::QuantumVulnerable);
}

#[test]
fn test_e2e_user_catalog_rules_extend_builtin() {
    let dir = TempDir::new().unwrap();
    let rules = write_file(
        dir.path(),
        "extra_rules.json",
        r#"{
            "version": "1",
            "rules": [
                {
                    "label": "VaultTransitKey",
                    "pattern": "VAULT_TRANSIT_KEY=(.*)",
                    "category": "Key Path",
                    "shape": "value_only"
                }
            ]
        }"#,
    );
    let config = write_file(
        dir.path(),
        "vault.env",
        "VAULT_TRANSIT_KEY=transit/rsa-2048-key\n",
    );

    let mut catalog = Catalog::builtin().unwrap();
    catalog.merge(Catalog::from_json_file(&rules).unwrap());
    let scanner = Scanner::new(catalog);

    let mut store = AssetStore::open_in_memory().unwrap();
    let outcome = scanner.scan_and_store(&config, &mut store).unwrap();

    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].kind, "VaultTransitKey");
    assert_eq!(outcome.findings[0].status, RiskStatus::QuantumVulnerable);
    assert_eq!(outcome.findings[0].metadata.category, "Key Path");
}
