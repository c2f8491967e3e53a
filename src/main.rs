//! dirsnap - snapshot directory trees as content-hash inventories.
//!
//! Usage:
//!   dirsnap --dir PATH               Scan one root, write report_<date>.json
//!   dirsnap --dirs ROOT1 ROOT2 ...   Scan several roots independently
//!   dirsnap --dir PATH --stdout      Print the report instead of writing it
//!   dirsnap --help                   Show help

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use dirsnap_core::ScanConfig;
use dirsnap_report::{print_report, run_scan, write_report};

#[derive(Parser)]
#[command(
    name = "dirsnap",
    version,
    about = "Directory tree auditing tool",
    long_about = "dirsnap scans directory trees, digests every file's content, and \
                  produces a JSON report grouping files by their containing \
                  directory, for snapshotting a subtree and comparing runs."
)]
struct Cli {
    /// Directory to scan
    #[arg(long, value_name = "PATH", conflicts_with = "dirs")]
    dir: Option<PathBuf>,

    /// Scan each positional ROOT independently
    #[arg(long)]
    dirs: bool,

    /// Roots to scan with --dirs
    #[arg(value_name = "ROOTS")]
    roots: Vec<PathBuf>,

    /// Exclusion substring, merged with the built-in set (repeatable)
    #[arg(long, value_name = "SUBSTR")]
    exclude: Vec<String>,

    /// Print the report to stdout instead of writing a report file
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    let roots: Vec<PathBuf> = if cli.dirs {
        cli.roots
    } else {
        cli.dir.into_iter().collect()
    };

    if roots.is_empty() {
        warn!("nothing to scan: pass --dir <PATH> or --dirs <ROOTS>...");
        return Ok(());
    }

    let config = ScanConfig::builder()
        .roots(roots)
        .exclude(cli.exclude)
        .stdout(cli.stdout)
        .build()?;

    let report = run_scan(&config)?;

    if config.stdout {
        print_report(&report)?;
    } else {
        let path = write_report(&report, Path::new("."))?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for `--stdout` report output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
