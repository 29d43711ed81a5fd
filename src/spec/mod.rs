//! # Schema Model
//!
//! In-memory form of the input document: named [`Definition`]s and the
//! operations under each URL path. Loading resolves every type tag into a
//! [`TypeDescriptor`] so later passes never compare type strings.
//!
//! Only the subset of Swagger 2.0 the client generator consumes is modeled;
//! unknown fields are ignored.
//!
//! ```rust
//! use tsclient_gen::spec::{parse_schema, SchemaFormat, TypeDescriptor, PrimitiveKind};
//!
//! let doc = parse_schema(
//!     r#"{"definitions": {"account": {"properties": {"user_id": {"type": "string"}}}}}"#,
//!     SchemaFormat::Json,
//! )?;
//! let field = &doc.definitions["account"].properties["user_id"];
//! assert_eq!(field.descriptor, TypeDescriptor::Primitive(PrimitiveKind::String));
//! # Ok::<(), tsclient_gen::GenerateError>(())
//! ```

mod load;
mod types;


pub use load::*;
pub use types::*;
