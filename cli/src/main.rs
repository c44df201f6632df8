//! CLI for the GRASS GIS addon overview generator.
//!
//! This tool scans an organization's repositories for GRASS GIS addons and
//! renders a static HTML overview page of them.

use addon_overview::{OverviewConfig, RunSummary, Runner, RunnerConfig, RunnerError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Addon Overview - Generate an HTML overview of GRASS GIS addons across repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the overview config file; defaults apply when it is absent.
    #[arg(long, default_value = "overview.toml")]
    config: PathBuf,

    /// GitHub Personal Access Token; anonymous access works but is rate limited.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Path to the HTML template.
    #[arg(long, default_value = "templates/overview.html")]
    template: PathBuf,

    /// Path of the generated HTML file.
    #[arg(long, default_value = "grass_addon_overview.html")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_skips() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let overview = OverviewConfig::load_or_default(&args.config)?;
    let mut config = RunnerConfig::new(overview, args.template, args.output);
    if let Some(token) = args.token {
        config = config.with_token(token);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );
    println!("  Dedicated repositories: {}", summary.dedicated_repos);
    println!("  Embedded repositories: {}", summary.embedded_repos);
    println!("  Addons collected: {}", summary.addons_collected);
    println!("  Records overwritten: {}", summary.records_overwritten);

    if summary.has_skips() {
        println!("  Skipped ({}):", summary.skipped.len());
        for skip in &summary.skipped {
            println!("    {} - {}", skip.subject, skip.reason);
        }
    }
}
