use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use crate::cli::OutputFormat;
use crate::finding::Finding;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub total_findings: usize,
    pub findings: &'a [Finding],
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(findings: &[Finding], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let output = JsonOutput {
                    total_findings: findings.len(),
                    findings,
                };
                Ok(serde_json::to_string_pretty(&output)?)
            }
            OutputFormat::Text => Ok(Self::format_text(findings)),
        }
    }

    fn format_text(findings: &[Finding]) -> String {
        let mut out = String::new();
        for finding in findings {
            let _ = writeln!(
                out,
                "{} [{}] {} = {} ({})",
                finding.status,
                finding.metadata.risk_score,
                finding.kind,
                finding.algorithm,
                finding.location
            );
        }
        let _ = writeln!(out, "{} finding(s)", findings.len());
        out
    }
}
