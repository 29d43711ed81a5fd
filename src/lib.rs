//! # tsclient-gen
//!
//! **tsclient-gen** turns a Swagger 2.0 document into a single TypeScript
//! module: one interface per definition and a factory returning a client
//! object with one `fetch`-backed method per operation.
//!
//! ## Architecture
//!
//! - **[`spec`]** - Loads JSON/YAML documents into a typed schema model
//! - **[`generator`]** - Builds client declarations and renders them through Askama
//! - **[`naming`]** - Identifier conversions shared by the model and the generator
//! - **[`config`]** - Optional `tsclient-gen.toml` settings
//! - **[`cli`]** - The `tsclient-gen` command line
//! - **[`logging`]** - tracing subscriber setup
//!
//! ```text
//! input file → spec::load_schema → generator::build_client → Renderer → output
//! ```
//!
//! Any failure aborts the run before output is written.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod naming;
pub mod spec;

pub use error::{GenerateError, SchemaError};
pub use generator::{
    build_client, generate_client, generate_client_source, ClientSettings, FetchClientRenderer,
    Renderer,
};
pub use spec::{load_schema, parse_schema, SchemaDocument, SchemaFormat};
