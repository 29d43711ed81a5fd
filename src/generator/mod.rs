//! # Generator Module
//!
//! Turns a loaded [`SchemaDocument`](crate::spec::SchemaDocument) into the
//! source of a TypeScript client module.
//!
//! ## Architecture
//!
//! ```text
//! SchemaDocument → build_client → ClientModule → Renderer → source text
//! ```
//!
//! 1. **Build** - [`build_client`] checks references, path placeholders and name
//!    collisions, then lowers every definition to an [`InterfaceDecl`] and every
//!    operation to a [`MethodDecl`]. All validation happens here, so a failing
//!    document never produces partial output.
//! 2. **Render** - a [`Renderer`] prints the declarations. [`FetchClientRenderer`]
//!    uses an Askama template (`templates/client.ts.txt`) that emits a factory
//!    returning a `fetch`-backed client object.
//! 3. **Write** - [`generate_client`] loads the input, runs both steps and writes
//!    the result to a file (atomically) or stdout.
//!
//! ## Example
//!
//! ```
//! use tsclient_gen::generator::{generate_client_source, ClientSettings};
//! use tsclient_gen::spec::{parse_schema, SchemaFormat};
//!
//! let doc = parse_schema(
//!     r#"{"definitions": {"account": {"properties": {"user_id": {"type": "string"}}}}}"#,
//!     SchemaFormat::Json,
//! )?;
//! let source = generate_client_source(&doc, &ClientSettings::default())?;
//! assert!(source.contains("export interface Account {"));
//! assert!(source.contains("  userId?: string;"));
//! # Ok::<(), tsclient_gen::GenerateError>(())
//! ```

mod ast;
mod build;
mod generate;
mod render;
mod resolve;

#[cfg(test)]
mod tests;

pub use ast::{
    ArgDecl, ClientModule, FieldDecl, InterfaceDecl, MethodDecl, PathSubstitution, QueryEntry,
};
pub use build::{build_client, DISPATCHER_NAME};
pub use generate::{generate_client, generate_client_source};
pub use render::{
    ClientSettings, FetchClientRenderer, Renderer, DEFAULT_API_NAME, DEFAULT_BASE_PATH,
    DEFAULT_TIMEOUT_MS,
};
pub use resolve::{resolve_type, TsType};
