//! Error types for schema loading and client generation.
//!
//! [`SchemaError`] covers documents whose shape the generator cannot model;
//! [`GenerateError`] wraps everything that can abort a generation run. Both are
//! fatal: the driver reports them and exits without writing output.

use std::path::PathBuf;
use thiserror::Error;

/// The input document has a shape the schema model cannot represent.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// An operation has no `operationId`, so no method name can be derived.
    #[error("operation {method} {path} is missing an operationId")]
    MissingOperationId { path: String, method: String },

    /// A container type wraps another container (e.g. array of arrays).
    #[error("{location}: nested {outer} of {inner} is not supported (one level of array/map wrapping only)")]
    UnsupportedNesting {
        location: String,
        outer: &'static str,
        inner: &'static str,
    },
}

/// Any failure that aborts a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unable to read schema {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unable to decode YAML schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A `$ref` does not name a definition present in the document.
    #[error("{location}: unresolved reference '{reference}'")]
    UnresolvedReference { location: String, reference: String },

    /// A path parameter is not matched by exactly one `{name}` placeholder.
    #[error("{location}: path parameter '{name}' appears {occurrences} time(s) in the URL template (expected exactly once)")]
    PathParameterMismatch {
        location: String,
        name: String,
        occurrences: usize,
    },

    /// Two operations map onto the same generated method.
    #[error("operations '{first}' and '{second}' both generate method '{method}'")]
    DuplicateOperation {
        method: String,
        first: String,
        second: String,
    },

    /// Two parameters of one operation map onto the same argument name.
    #[error("{location}: parameters '{first}' and '{second}' both generate argument '{name}'")]
    DuplicateArgument {
        location: String,
        name: String,
        first: String,
        second: String,
    },

    /// Two definition keys capitalize to the same interface name.
    #[error("definitions '{first}' and '{second}' both generate interface '{name}'")]
    DuplicateTypeName {
        name: String,
        first: String,
        second: String,
    },

    /// The configured factory name cannot be used as an identifier.
    #[error("'{0}' is not a valid API factory name")]
    InvalidApiName(String),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}
