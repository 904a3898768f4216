use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wcag_report_core::render_path;

mod args;

fn init_logging() {
    let level = std::env::var("WCAG_REPORT_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = args::Args::parse();

    let document = render_path(&args.findings_path, args.format.into(), args.suite.clone())?;
    tracing::info!(
        format = %document.format,
        bytes = document.bytes.len(),
        "report rendered"
    );

    if args.digest {
        eprintln!("sha256:{}", document.sha256);
    }

    match args.out {
        Some(path) => std::fs::write(&path, &document.bytes)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => std::io::stdout().write_all(&document.bytes)?,
    }

    Ok(())
}
