//! CLI for genreadme.
//!
//! This tool reads a Go module manifest and prints a README header with
//! status badges for the GitHub repository it declares.

use clap::Parser;
use genreadme::{Generator, GeneratorConfig, GeneratorError, DEFAULT_MANIFEST};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// genreadme - Print a README header with status badges for a GitHub-hosted Go module.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the go.mod file.
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    modfile: PathBuf,

    /// Path to the go.mod file (overrides --modfile).
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to generate README");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting written to stderr, keeping stdout for the README
/// - Log level filtering via `RUST_LOG` env var (defaults to "warn")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Main execution logic.
fn run(args: Args) -> Result<(), GeneratorError> {
    let manifest_path = args.path.unwrap_or(args.modfile);
    let generator = Generator::new(GeneratorConfig::new(manifest_path));

    generator.write_to(&mut std::io::stdout().lock())
}
