//! # wpgraphql-site
//!
//! Renders the WPGraphQL landing page to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Print the index page
//! wpgraphql-site render > index.html
//!
//! # Write every route under ./public (or `out_dir` from site.toml)
//! wpgraphql-site build
//! wpgraphql-site build --out dist --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use wpgraphql_site::config::{DEFAULT_CONFIG_FILE, SiteConfig};
use wpgraphql_site::generate::write_site;
use wpgraphql_site::routes::Site;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "wpgraphql-site")]
#[command(about = "Render the WPGraphQL landing page to static HTML")]
#[command(version)]
struct Args {
    /// Path to site.toml (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the index page HTML to stdout
    Render,
    /// Write the static site to disk
    Build {
        /// Output directory (overrides out_dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the build report as JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn run(args: Args) -> Result<()> {
    let config = SiteConfig::load_from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let site = Site::wpgraphql(&config).context("registering routes")?;

    match args.command {
        Command::Render => {
            let route = site.get("/").context("index route is not registered")?;
            println!("{}", route.render());
        }
        Command::Build { out, json } => {
            let out_dir = out.unwrap_or_else(|| config.out_dir.clone());
            let report = write_site(&site, &out_dir)
                .with_context(|| format!("building site into {}", out_dir.display()))?;

            info!(
                "Built {} page(s), {} bytes, into {}",
                report.pages.len(),
                report.total_bytes(),
                report.out_dir.display()
            );
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serializing build report")?
                );
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[wpgraphql-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
