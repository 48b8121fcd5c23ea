//! lagrange-secret CLI
//!
//! Usage:
//!     lagrange-secret < input.json
//!     lagrange-secret testcase1.json
//!     lagrange-secret --coefficients cases/
//!     lagrange-secret a.json - < b.json

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lagrange_secret::batch;
use lagrange_secret::Mode;

/// Recover the constant term of a polynomial from base-encoded points
#[derive(Parser)]
#[command(name = "lagrange-secret")]
#[command(version)]
#[command(about = "Exact Lagrange interpolation at x = 0", long_about = None)]
struct Cli {
    /// Record files or directories of *.json records; reads stdin when empty or "-"
    inputs: Vec<PathBuf>,

    /// Print every coefficient, lowest power first, instead of the constant term
    #[arg(short, long)]
    coefficients: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = if cli.coefficients {
        Mode::Coefficients
    } else {
        Mode::ConstantTerm
    };

    let mut inputs = cli.inputs;
    if inputs.iter().all(|p| p.as_os_str() == batch::STDIN) {
        inputs = vec![PathBuf::from(batch::STDIN)];
    }

    if let [single] = inputs.as_slice() {
        if !single.is_dir() {
            let out = batch::solve_file(single, mode)
                .with_context(|| format!("failed to solve {}", single.display()))?;
            println!("{out}");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let sources = batch::collect_sources(&inputs)?;
    let reports = batch::run(&sources, mode);
    for report in &reports {
        println!("{}", report.line());
    }

    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = reports.len(), "some sources failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
