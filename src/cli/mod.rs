//! # CLI Module
//!
//! Command-line interface of the `tsclient-gen` binary.
//!
//! ```bash
//! tsclient-gen api.swagger.json --output src/api.gen.ts
//! ```
//!
//! Arguments:
//! - `<INPUT>` - Swagger 2.0 document (JSON, or YAML by `.yaml`/`.yml` extension)
//! - `-o, --output <FILE>` - Write the client here instead of stdout
//! - `--config <FILE>` - Generator config (default: `tsclient-gen.toml` beside the input)
//! - `--api-name <NAME>` - Name of the exported factory
//! - `--base-path <URL>` - Fallback base URL baked into the client
//! - `--timeout-ms <MS>` - Fallback request timeout baked into the client
//!
//! Failures are reported on stderr with a non-zero exit status; no output is
//! written in that case.
//!
//! ## Usage from Code
//!
//! ```rust,no_run
//! use tsclient_gen::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(cli)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod commands;


pub use commands::{run, run_cli, Cli};
