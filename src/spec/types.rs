use std::collections::BTreeMap;
use std::fmt;

/// Primitive type tags understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Integer,
    Number,
    Boolean,
    String,
}

impl PrimitiveKind {
    /// Parse a Swagger `type` tag; containers and unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "integer" => Some(PrimitiveKind::Integer),
            "number" => Some(PrimitiveKind::Number),
            "boolean" => Some(PrimitiveKind::Boolean),
            "string" => Some(PrimitiveKind::String),
            _ => None,
        }
    }
}

/// A property, parameter or response type, resolved from its type tag once at
/// load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// `type: array`; the element is a primitive or a reference.
    ArrayOf(Box<TypeDescriptor>),
    /// `type: object` with a schema-valued `additionalProperties`: a string-keyed map.
    MapOf(Box<TypeDescriptor>),
    /// A `$ref` pointer, kept verbatim (possibly empty when the document gave
    /// neither a known type tag nor a pointer).
    Reference(String),
}

impl TypeDescriptor {
    /// Every `$ref` pointer this descriptor mentions.
    pub fn references(&self) -> Vec<&str> {
        match self {
            TypeDescriptor::Primitive(_) => Vec::new(),
            TypeDescriptor::ArrayOf(inner) | TypeDescriptor::MapOf(inner) => inner.references(),
            TypeDescriptor::Reference(pointer) => vec![pointer.as_str()],
        }
    }
}

/// Where an operation parameter travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    /// `header`, `formData` or anything else: kept in the signature, not wired.
    Other(String),
}

impl From<&str> for ParameterLocation {
    fn from(s: &str) -> Self {
        match s {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "body" => ParameterLocation::Body,
            other => ParameterLocation::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Body => write!(f, "body"),
            ParameterLocation::Other(other) => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub descriptor: TypeDescriptor,
    pub description: String,
}

/// A named data shape from `definitions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub description: String,
    /// Lexically ordered so generated output is reproducible.
    pub properties: BTreeMap<String, Property>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub descriptor: TypeDescriptor,
}

/// One HTTP operation on a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// URL template with `{name}` placeholders.
    pub path: String,
    /// HTTP method as spelled in the document (usually lower-case).
    pub method: String,
    pub operation_id: String,
    pub summary: String,
    /// Declaration order; determines generated argument order.
    pub parameters: Vec<Parameter>,
    /// The 200-response schema, `None` for an untyped result.
    pub response: Option<TypeDescriptor>,
}

/// The whole input document. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    pub definitions: BTreeMap<String, Definition>,
    /// URL path → method → operation.
    pub paths: BTreeMap<String, BTreeMap<String, Operation>>,
}

impl SchemaDocument {
    /// All operations in (path, method) lexical order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.paths.values().flat_map(|methods| methods.values())
    }
}
