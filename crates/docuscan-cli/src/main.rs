// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// docuscan — photograph in, flattened black-and-white scan out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docuscan_core::{Result, ScanConfig, humanize_error};
use docuscan_pipeline::DocumentScanner;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "docuscan", version, about = "Scan a photographed document")]
struct Cli {
    /// Photograph of the document to scan.
    input: PathBuf,

    /// Where to write the scan (default: `<input-stem>_scanned.<ext>`
    /// next to the input).
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file overriding the default scan parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the detected page boundary drawn on the working image.
    #[arg(long)]
    outline: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let friendly = humanize_error(&e);
            eprintln!("error: {}", friendly.message);
            eprintln!("  {}", friendly.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let config: ScanConfig = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        }
        None => ScanConfig::default(),
    };
    config.validate()?;

    let scanner = DocumentScanner::new(config);
    let scan = scanner.scan_file(&cli.input)?;

    if let Some(outline_path) = &cli.outline {
        scan.save_outline(outline_path)?;
        info!(path = %outline_path.display(), "boundary overlay written");
    }

    match &cli.output {
        Some(path) => {
            scan.save_to(path)?;
            Ok(path.clone())
        }
        None => scan.save(),
    }
}
