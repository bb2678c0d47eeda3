//! Generates Docker Toolbox docs and installers from `tools.yaml`.
//!
//! Usage:
//!   toolbox-gen --validate
//!   toolbox-gen --all --output-dir dist
//!   toolbox-gen --typst

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use toolbox_gen::compile::DEFAULT_COMPILE_TIMEOUT;
use toolbox_gen::{Artifact, GenerateOptions, RunStatus, default_catalog_path, run_generation};

#[derive(Parser, Debug)]
#[command(name = "toolbox-gen")]
#[command(about = "Generate Docker Toolbox documentation and installers")]
struct Cli {
    /// Validate tools.yaml
    #[arg(long)]
    validate: bool,
    /// Generate markdown documentation
    #[arg(long)]
    markdown: bool,
    /// Generate PowerShell installer
    #[arg(long)]
    powershell: bool,
    /// Generate Bash installer
    #[arg(long)]
    bash: bool,
    /// Generate Typst documentation (never included in --all)
    #[arg(long)]
    typst: bool,
    /// Generate all files (except Typst); validation errors are reported, not fatal
    #[arg(long)]
    all: bool,
    /// Output directory
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Catalog file; defaults to tools.yaml in the toolbox root
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Seconds to wait for the Typst compiler
    #[arg(long, default_value_t = DEFAULT_COMPILE_TIMEOUT.as_secs())]
    typst_timeout: u64,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn requested(&self) -> Vec<Artifact> {
        [
            (self.markdown, Artifact::Markdown),
            (self.powershell, Artifact::PowerShellInstaller),
            (self.bash, Artifact::BashInstaller),
            (self.typst, Artifact::Typst),
        ]
        .into_iter()
        .filter_map(|(flag, artifact)| flag.then_some(artifact))
        .collect()
    }
}

fn main() {
    match run() {
        Ok(RunStatus::Completed) => {}
        Ok(RunStatus::ValidationFailed) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<RunStatus> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let options = GenerateOptions {
        catalog_path: cli.catalog.clone().unwrap_or_else(default_catalog_path),
        output_dir: cli.output_dir.clone(),
        work_dir: env::current_dir().context("resolving working directory")?,
        validate: cli.validate,
        requested: cli.requested(),
        all: cli.all,
        compile_timeout: Duration::from_secs(cli.typst_timeout),
    };
    run_generation(&options)
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(cli.verbose >= 2))
        .init();
}
