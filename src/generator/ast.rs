//! Declarations produced from the schema model, independent of how they are
//! printed.

use super::resolve::TsType;
use crate::naming::property_key;
use crate::spec::ParameterLocation;
use std::fmt;

/// Everything one generated client module declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientModule {
    /// One interface per definition, in definition-key order.
    pub interfaces: Vec<InterfaceDecl>,
    /// One method per operation, in (path, method) order.
    pub methods: Vec<MethodDecl>,
}

impl ClientModule {
    pub fn interface(&self, name: &str) -> Option<&InterfaceDecl> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    /// Single-line comment text; empty when the definition had none.
    pub doc: String,
    pub fields: Vec<FieldDecl>,
}

/// An interface field. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub doc: String,
    pub ty: TsType,
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?: {}", property_key(&self.name), self.ty)
    }
}

/// A positional argument of a generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDecl {
    /// Generated (camelCased, sanitized) argument name.
    pub name: String,
    pub ty: TsType,
    pub required: bool,
    pub location: ParameterLocation,
}

impl fmt::Display for ArgDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.required { "" } else { "?" };
        write!(f, "{}{}: {}", self.name, marker, self.ty)
    }
}

/// `{placeholder}` in the URL template replaced by an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSubstitution {
    /// The literal placeholder including braces, e.g. `{id}`.
    pub placeholder: String,
    pub arg: String,
}

/// A query-string key fed from an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntry {
    /// Wire name, as declared in the schema.
    pub key: String,
    pub arg: String,
}

/// One generated API method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub operation_id: String,
    pub summary: String,
    /// Upper-case HTTP method.
    pub http_method: String,
    /// URL template as declared.
    pub path: String,
    /// Declaration order; the options bag is appended by the renderer.
    pub args: Vec<ArgDecl>,
    pub path_substitutions: Vec<PathSubstitution>,
    pub query: Vec<QueryEntry>,
    /// Argument serialized as the JSON payload.
    pub body: Option<String>,
    pub returns: TsType,
}

impl MethodDecl {
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn body_arg(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn required_args(&self) -> impl Iterator<Item = &ArgDecl> {
        self.args.iter().filter(|a| a.required)
    }
}
