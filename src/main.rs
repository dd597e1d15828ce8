use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;

use crypto_asset_scanner::cli::Args;
use crypto_asset_scanner::logging::{self, Verbosity};
use crypto_asset_scanner::output::OutputFormatter;
use crypto_asset_scanner::{AssetStore, Catalog, RiskStatus, Scanner};

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate().context("Invalid arguments")?;

    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let mut store = AssetStore::open(&args.db)
        .with_context(|| format!("Failed to open database: {}", args.db.display()))?;

    let findings = if let Some(ref status) = args.status {
        let status: RiskStatus = status
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("Known statuses: see --help")?;
        store.query_by_status(status)?
    } else if args.list {
        store.query_all()?
    } else {
        let path = args
            .path
            .as_deref()
            .context("--path is required when scanning")?;

        let mut catalog = Catalog::builtin()?;
        if let Some(ref rules_path) = args.rules {
            catalog.merge(Catalog::from_json_file(rules_path)?);
        }

        let scanner = Scanner::new(catalog);
        scanner.scan_path(path, &mut store)?
    };

    print!("{}", OutputFormatter::format(&findings, args.format)?);
    Ok(())
}
