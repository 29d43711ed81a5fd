use crate::config::{resolve_config, GeneratorConfig};
use crate::generator::generate_client;
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Command-line interface for tsclient-gen
///
/// Generates a TypeScript fetch client from a Swagger 2.0 document.
#[derive(Debug, Parser)]
#[command(name = "tsclient-gen")]
#[command(version, about = "Generate a TypeScript client from a Swagger 2.0 document", long_about = None)]
pub struct Cli {
    /// Path to the Swagger document (JSON, or YAML by extension)
    pub input: PathBuf,

    /// Extra positional arguments are ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Write the client to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to the generator config file (tsclient-gen.toml)
    /// If not provided, will auto-detect alongside the input
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of the exported client factory
    #[arg(long)]
    pub api_name: Option<String>,

    /// Default base URL of the generated client
    #[arg(long)]
    pub base_path: Option<String>,

    /// Default request timeout of the generated client, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    /// Settings given as flags; unset flags defer to the config file.
    pub fn overrides(&self) -> GeneratorConfig {
        GeneratorConfig {
            api_name: self.api_name.clone(),
            base_path: self.base_path.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Parse the process arguments and run the generator.
///
/// # Errors
///
/// Returns an error if configuration, loading, generation or writing fails.
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}

/// Run the generator for already-parsed arguments.
///
/// # Errors
///
/// Returns an error if configuration, loading, generation or writing fails.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.extra.is_empty() {
        warn!(ignored = ?cli.extra, "Ignoring extra positional arguments");
    }

    let settings = resolve_config(cli.config.as_deref(), &cli.input)?
        .merged_with(cli.overrides())
        .into_settings();

    generate_client(&cli.input, cli.output.as_deref(), &settings)
}
