use super::types::{
    Definition, Operation, Parameter, ParameterLocation, PrimitiveKind, Property,
    SchemaDocument, TypeDescriptor,
};
use crate::error::{GenerateError, SchemaError};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Input encoding of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// `.yaml`/`.yml` are YAML, everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => SchemaFormat::Yaml,
            _ => SchemaFormat::Json,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    definitions: BTreeMap<String, RawDefinition>,
    paths: BTreeMap<String, RawPathItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDefinition {
    description: String,
    properties: BTreeMap<String, RawSchema>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPathItem {
    parameters: Vec<RawParameter>,
    #[serde(flatten)]
    operations: BTreeMap<String, RawOperation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawOperation {
    summary: String,
    operation_id: Option<String>,
    parameters: Vec<RawParameter>,
    responses: BTreeMap<String, RawResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    schema: Option<RawSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawParameter {
    name: String,
    #[serde(rename = "in")]
    location: String,
    required: bool,
    #[serde(rename = "type")]
    type_tag: Option<String>,
    items: Option<Box<RawSchema>>,
    additional_properties: Option<RawAdditional>,
    schema: Option<RawSchema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "type")]
    type_tag: Option<String>,
    #[serde(rename = "$ref")]
    reference: Option<String>,
    items: Option<Box<RawSchema>>,
    additional_properties: Option<RawAdditional>,
    description: String,
}

/// `additionalProperties` is either a schema or a boolean switch; the switch
/// alone never yields a typed map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAdditional {
    Schema(Box<RawSchema>),
    Flag(IgnoredAny),
}

impl RawAdditional {
    fn schema(&self) -> Option<&RawSchema> {
        match self {
            RawAdditional::Schema(schema) if !schema.is_empty() => Some(schema),
            _ => None,
        }
    }
}

impl RawSchema {
    fn is_empty(&self) -> bool {
        self.type_tag.is_none() && self.reference.is_none()
    }
}

/// Read and decode a schema document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON/YAML, or
/// contains a shape the model cannot represent.
pub fn load_schema(path: &Path) -> Result<SchemaDocument, GenerateError> {
    let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_schema(&content, SchemaFormat::from_path(path))?;
    info!(
        path = %path.display(),
        definitions = doc.definitions.len(),
        operations = doc.operations().count(),
        "Loaded schema"
    );
    Ok(doc)
}

/// Decode a schema document held in memory.
///
/// # Errors
///
/// See [`load_schema`].
pub fn parse_schema(content: &str, format: SchemaFormat) -> Result<SchemaDocument, GenerateError> {
    let mut value: serde_json::Value = match format {
        SchemaFormat::Json => serde_json::from_str(content)?,
        SchemaFormat::Yaml => serde_yaml::from_str(content)?,
    };
    strip_unknown_verbs(&mut value);
    let raw: RawDocument = serde_json::from_value(value)?;
    Ok(convert_document(raw)?)
}

/// Drop path-item keys that are neither HTTP verbs nor path-level `parameters`
/// so the remaining keys deserialize as operations.
fn strip_unknown_verbs(val: &mut serde_json::Value) {
    let Some(serde_json::Value::Object(paths)) = val.get_mut("paths") else {
        return;
    };
    for item in paths.values_mut() {
        if let serde_json::Value::Object(obj) = item {
            obj.retain(|k, _| k == "parameters" || METHODS.contains(&k.to_ascii_lowercase().as_str()));
        }
    }
}

fn convert_document(raw: RawDocument) -> Result<SchemaDocument, SchemaError> {
    let mut definitions = BTreeMap::new();
    for (name, def) in raw.definitions {
        let mut properties = BTreeMap::new();
        for (field, schema) in def.properties {
            let location = format!("definitions.{name}.{field}");
            properties.insert(
                field,
                Property {
                    descriptor: descriptor(&schema, &location)?,
                    description: schema.description.clone(),
                },
            );
        }
        debug!(definition = %name, properties = properties.len(), "Converted definition");
        definitions.insert(
            name.clone(),
            Definition {
                name,
                description: def.description,
                properties,
            },
        );
    }

    let mut paths = BTreeMap::new();
    for (path, item) in raw.paths {
        let mut methods = BTreeMap::new();
        for (method, op) in item.operations {
            let operation = convert_operation(&path, &method, op, &item.parameters)?;
            methods.insert(method, operation);
        }
        paths.insert(path, methods);
    }

    Ok(SchemaDocument { definitions, paths })
}

fn convert_operation(
    path: &str,
    method: &str,
    op: RawOperation,
    shared: &[RawParameter],
) -> Result<Operation, SchemaError> {
    let operation_id = op
        .operation_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| SchemaError::MissingOperationId {
            path: path.to_string(),
            method: method.to_string(),
        })?;

    // Path-level parameters come first unless the operation redeclares them.
    let inherited = shared.iter().filter(|p| {
        !op.parameters
            .iter()
            .any(|own| own.name == p.name && own.location == p.location)
    });
    let mut parameters = Vec::new();
    for raw in inherited.chain(op.parameters.iter()) {
        let location = format!("{operation_id}.{}", raw.name);
        parameters.push(convert_parameter(raw, &location)?);
    }

    // A schema that names no type and no definition means an untyped result.
    let response = match op.responses.get("200").and_then(|r| r.schema.as_ref()) {
        Some(schema) => match descriptor(schema, &format!("{operation_id}.responses.200"))? {
            TypeDescriptor::Reference(pointer) if pointer.is_empty() => None,
            typed => Some(typed),
        },
        None => None,
    };

    Ok(Operation {
        path: path.to_string(),
        method: method.to_string(),
        operation_id,
        summary: op.summary,
        parameters,
        response,
    })
}

fn convert_parameter(raw: &RawParameter, location: &str) -> Result<Parameter, SchemaError> {
    let kind = ParameterLocation::from(raw.location.as_str());
    let descriptor = if kind == ParameterLocation::Body {
        let schema = raw.schema.clone().unwrap_or_default();
        descriptor(&schema, location)?
    } else {
        let inline = RawSchema {
            type_tag: raw.type_tag.clone(),
            reference: None,
            items: raw.items.clone(),
            additional_properties: raw.additional_properties.clone(),
            description: String::new(),
        };
        descriptor(&inline, location)?
    };
    Ok(Parameter {
        name: raw.name.clone(),
        location: kind,
        required: raw.required,
        descriptor,
    })
}

/// Resolve a raw schema into a [`TypeDescriptor`], allowing one container level.
fn descriptor(schema: &RawSchema, location: &str) -> Result<TypeDescriptor, SchemaError> {
    match schema.type_tag.as_deref() {
        Some("array") => {
            let items = schema.items.as_deref().cloned().unwrap_or_default();
            Ok(TypeDescriptor::ArrayOf(Box::new(element(&items, "array", location)?)))
        }
        Some("object") => match schema.additional_properties.as_ref().and_then(RawAdditional::schema) {
            Some(values) => Ok(TypeDescriptor::MapOf(Box::new(element(values, "map", location)?))),
            None => Ok(reference(schema)),
        },
        Some(tag) => Ok(PrimitiveKind::from_tag(tag)
            .map(TypeDescriptor::Primitive)
            .unwrap_or_else(|| reference(schema))),
        None => Ok(reference(schema)),
    }
}

fn element(
    schema: &RawSchema,
    outer: &'static str,
    location: &str,
) -> Result<TypeDescriptor, SchemaError> {
    let nested = match schema.type_tag.as_deref() {
        Some("array") => Some("array"),
        Some("object")
            if schema
                .additional_properties
                .as_ref()
                .and_then(RawAdditional::schema)
                .is_some() =>
        {
            Some("map")
        }
        _ => None,
    };
    if let Some(inner) = nested {
        return Err(SchemaError::UnsupportedNesting {
            location: location.to_string(),
            outer,
            inner,
        });
    }
    descriptor(schema, location)
}

/// Unknown or unhandled shapes fall through to whatever `$ref` is present.
fn reference(schema: &RawSchema) -> TypeDescriptor {
    TypeDescriptor::Reference(schema.reference.clone().unwrap_or_default())
}
