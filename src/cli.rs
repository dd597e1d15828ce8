use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "crypto-asset-scanner")]
#[command(about = "Scan configuration files for cryptographic material and assess its risk", long_about = None)]
pub struct Args {
    /// File or directory of configuration files to scan
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// SQLite database holding discovered assets
    #[arg(long, value_name = "FILE", default_value = "crypto_assets.db")]
    pub db: PathBuf,

    /// Additional catalog rules file (JSON format)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// List stored findings with this status instead of scanning
    #[arg(long, value_name = "STATUS", conflicts_with = "path")]
    pub status: Option<String>,

    /// List all stored findings instead of scanning
    #[arg(long, conflicts_with_all = ["path", "status"])]
    pub list: bool,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.path.is_none() && self.status.is_none() && !self.list {
            anyhow::bail!("Nothing to do: specify --path to scan, or --list/--status to query");
        }
        if let Some(ref rules_path) = self.rules {
            if !rules_path.exists() {
                anyhow::bail!("Rules file does not exist: {}", rules_path.display());
            }
        }
        Ok(())
    }
}
