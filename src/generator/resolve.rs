use crate::naming::ref_to_type_name;
use crate::spec::{PrimitiveKind, TypeDescriptor};
use std::fmt;

/// A TypeScript type expression the emitter can print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    Number,
    Boolean,
    String,
    Array(Box<TsType>),
    /// `Map<string, T>`
    Map(Box<TsType>),
    /// A generated interface.
    Named(String),
    /// Unconstrained result of an operation without a typed 200 response.
    Any,
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Number => write!(f, "number"),
            TsType::Boolean => write!(f, "boolean"),
            TsType::String => write!(f, "string"),
            TsType::Array(inner) => write!(f, "Array<{inner}>"),
            TsType::Map(inner) => write!(f, "Map<string, {inner}>"),
            TsType::Named(name) => write!(f, "{name}"),
            TsType::Any => write!(f, "any"),
        }
    }
}

/// Map a schema descriptor to the type expression emitted for it.
///
/// | descriptor                      | emitted              |
/// |---------------------------------|----------------------|
/// | integer, number                 | `number`             |
/// | boolean                         | `boolean`            |
/// | string                          | `string`             |
/// | array of primitive / reference  | `Array<T>`           |
/// | object with additionalProperties| `Map<string, T>`     |
/// | reference                       | interface name       |
///
/// References are not checked here; an empty pointer yields an empty name.
pub fn resolve_type(descriptor: &TypeDescriptor) -> TsType {
    match descriptor {
        TypeDescriptor::Primitive(kind) => primitive(*kind),
        TypeDescriptor::ArrayOf(inner) => TsType::Array(Box::new(resolve_type(inner))),
        TypeDescriptor::MapOf(inner) => TsType::Map(Box::new(resolve_type(inner))),
        TypeDescriptor::Reference(pointer) => TsType::Named(ref_to_type_name(pointer)),
    }
}

fn primitive(kind: PrimitiveKind) -> TsType {
    match kind {
        PrimitiveKind::Integer | PrimitiveKind::Number => TsType::Number,
        PrimitiveKind::Boolean => TsType::Boolean,
        PrimitiveKind::String => TsType::String,
    }
}
